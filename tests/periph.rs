use core::mem::size_of;
use drone_stm32l4x6_map::{
    periph::Periph,
    reg::{mmio::host, prelude::*},
    token::Token,
};

mod port {
    drone_stm32l4x6_map::periph! {
        /// General-purpose I/O port.
        pub struct PortPeriph;

        /// Port A.
        PORTA 0x4800_0000;
        /// Port B.
        PORTB 0x4800_0400;

        /// Mode register.
        MODER {
            0x00 0x20 0xFFFF_FFFF RReg WReg;
            PORTA 0xABFF_FFFF;
            /// Pin 0 mode.
            MODE0 { 0 2 RRRegField WWRegField }
            /// Pin 5 mode.
            MODE5 { 10 2 RRRegField WWRegField }
        }
        /// Input data register.
        IDR {
            0x10 0x20 0x0000_0000 RReg RoReg;
            ID5 { 5 1 RRRegField RoRRegField }
        }
        /// Output data register.
        ODR {
            0x14 0x20 0x0000_0000 RReg WReg;
            OD5 { 5 1 RRRegField WWRegField }
            OD6 { 6 1 RRRegField WWRegField }
        }
        /// Bit set/reset register.
        BSRR {
            0x18 0x20 0x0000_0000 WReg WoReg;
            BS5 { 5 1 WWRegField WoWRegField }
            BR5 { 21 1 WWRegField WoWRegField }
        }
    }
}

mod timer {
    drone_stm32l4x6_map::periph! {
        /// Timer with alternate capture/compare views.
        pub struct TimerPeriph;

        TIMER1 0x4001_2C00;

        /// Capture/compare mode register 1, output mode.
        CCMR1_Output {
            0x18 0x20 0x0000_0000 RReg WReg;
            CC1S { 0 2 RRRegField WWRegField }
            OC1M { 4 3 RRRegField WWRegField }
        }
        /// Capture/compare mode register 1, input mode.
        CCMR1_Input @CCMR1_Output {
            0x18 0x20 0x0000_0000 RReg WReg;
            CC1S { 0 2 RRRegField WWRegField }
            IC1F { 4 4 RRRegField WWRegField }
        }
        /// Capture/compare mode register 2, absent from this build.
        #[cfg(any())]
        CCMR2_Output {
            0x1C 0x20 0x0000_0000 RReg WReg;
            CC3S { 0 2 RRRegField WWRegField }
        }
        /// Capture/compare register 1.
        #[cfg(all())]
        CCR1 {
            0x34 0x20 0x0000_0000 RReg WReg;
            CCR1 { 0 16 RRRegField WWRegField }
        }
    }
}

use port::{Porta, Portb, PORTA, PORTB};

#[test]
fn instance_addresses() {
    assert_eq!(<Porta as Periph>::BASE_ADDRESS, 0x4800_0000);
    assert_eq!(<Portb as Periph>::BASE_ADDRESS, PORTB);
    assert_eq!(<port::moder::Reg<PORTA> as Reg>::ADDRESS, 0x4800_0000);
    assert_eq!(<port::odr::Reg<PORTB> as Reg>::ADDRESS, 0x4800_0414);
    assert_eq!(<port::Bsrr<PORTB> as Reg>::ADDRESS, 0x4800_0418);
    assert_eq!(port::odr::OFFSET, 0x14);
}

#[test]
fn per_instance_reset_values() {
    assert_eq!(<port::moder::Reg<PORTA> as Reg>::RESET, 0xABFF_FFFF);
    assert_eq!(<port::moder::Reg<PORTB> as Reg>::RESET, 0xFFFF_FFFF);
    assert_eq!(port::moder::reset(PORTA), 0xABFF_FFFF);
    assert_eq!(port::moder::RESET, 0xFFFF_FFFF);
}

#[test]
fn instances_are_isolated() {
    host::wipe();
    let porta = unsafe { Porta::take() };
    let portb = unsafe { Portb::take() };
    porta.odr.od5.set_bit();
    assert!(porta.odr.od5.read_bit());
    assert!(!portb.odr.od5.read_bit());
    portb.odr.store(|r| r.set_od6());
    assert_eq!(porta.odr.load_bits(), 1 << 5);
    assert_eq!(portb.odr.load_bits(), 1 << 6);
}

#[test]
fn store_uses_instance_reset() {
    host::wipe();
    let porta = unsafe { Porta::take() };
    let portb = unsafe { Portb::take() };
    porta.moder.store(|r| r.write_mode5(0b01));
    portb.moder.store(|r| r.write_mode5(0b01));
    assert_eq!(porta.moder.load_bits(), 0xABFF_F7FF);
    assert_eq!(portb.moder.load_bits(), 0xFFFF_F7FF);
    assert_eq!(porta.moder.mode0.read_bits(), 0b11);
}

#[test]
fn write_only_and_read_only_registers() {
    host::wipe();
    let porta = unsafe { Porta::take() };
    porta.bsrr.br5.store_bit();
    assert_eq!(host::peek::<u32>(PORTA + 0x18), 1 << 21);
    porta.bsrr.store(|r| r.set_bs5());
    assert_eq!(host::peek::<u32>(PORTA + 0x18), 1 << 5);
    host::poke::<u32>(PORTA + 0x10, 1 << 5);
    assert!(porta.idr.id5.read_bit());
    assert!(porta.idr.load().id5());
}

#[test]
fn alias_views_share_memory() {
    host::wipe();
    let timer = unsafe { timer::Timer1::take() };
    timer.ccmr1_output.oc1m.write_bits(0b110);
    assert_eq!(timer.ccmr1_input.ic1f.read_bits(), 0b0110);
    timer.ccmr1_input.modify(|r| r.write_cc1s(0b01));
    assert_eq!(timer.ccmr1_output.load().cc1s(), 0b01);
    assert_eq!(
        <timer::Ccmr1Input<{ timer::TIMER1 }> as Reg>::ADDRESS,
        <timer::Ccmr1Output<{ timer::TIMER1 }> as Reg>::ADDRESS,
    );
}

#[test]
fn layout_metadata() {
    let info = <Porta as Periph>::INFO;
    assert_eq!(info.name, "PORT");
    assert_eq!(info.regs.len(), 4);
    assert_eq!(info.reg("ODR").map(|reg| reg.offset), Some(0x14));
    assert_eq!(info.span(), 0x1C);
    assert_eq!(info.validate(), Ok(()));
    let timer = timer::INFO;
    assert_eq!(timer.reg("CCMR1_Input").and_then(|reg| reg.alias), Some("CCMR1_Output"));
    assert_eq!(timer.regs.len(), 3);
    assert_eq!(timer.validate(), Ok(()));
}

#[test]
fn tokens_are_zero_sized() {
    assert_eq!(size_of::<Porta>(), 0);
    assert_eq!(size_of::<port::odr::Reg<PORTA>>(), 0);
    assert_eq!(size_of::<port::odr::Od5<PORTA>>(), 0);
}

#[test]
fn conditional_registers() {
    host::wipe();
    assert_eq!(timer::INFO.reg("CCMR2_Output"), None);
    assert_eq!(timer::INFO.reg("CCR1").map(|reg| reg.offset), Some(0x34));
    let timer = unsafe { timer::Timer1::take() };
    timer.ccr1.ccr1.write_bits(0xBEEF);
    assert_eq!(host::peek::<u32>(timer::TIMER1 + 0x34), 0xBEEF);
    assert_eq!(<timer::Ccr1<{ timer::TIMER1 }> as Reg>::ADDRESS, 0x4001_2C34);
}
