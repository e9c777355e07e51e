use core::mem::size_of;
use drone_stm32l4x6_map::{
    reg,
    reg::{mmio::host, prelude::*},
    token::Token,
};

reg! {
    /// ADC control register.
    pub mod ADC CR;
    0x5004_0008 0x20 0x2000_0000 RReg WReg;
    /// ADC enable control.
    ADEN { 0 1 RRRegField WWRegField }
    /// ADC disable command.
    ADDIS { 1 1 RRRegField WWRegField }
    /// Three-bit test field.
    SMP { 12 3 RRRegField WWRegField }
    /// Deep-power-down enable.
    DEEPPWD { 29 1 RRRegField WWRegField }
    /// Calibration in progress.
    ADCAL { 31 1 RRRegField RoRRegField }
}

reg! {
    pub mod TST ICR;
    0x4000_0004 0x20 0x0000_0000 WReg WoReg;
    CLEAR { 0 1 WWRegField WoWRegField }
    CODE { 4 4 WWRegField WoWRegField }
}

reg! {
    pub mod TST HALF;
    0x4000_0010 0x10 0x0700 RReg WReg;
    DS { 8 4 RRRegField WWRegField }
    LOW { 0 8 RRRegField WWRegField }
}

reg! {
    pub mod TST WORD;
    0x4000_0020 0x20 0xFFFF_FFFF RReg WReg;
    WORD { 0 32 RRRegField WWRegField }
}

#[test]
fn set_enable_bit() {
    host::wipe();
    let cr = unsafe { adc_cr::Reg::take() };
    cr.store(|r| r.clear_deeppwd());
    cr.aden.set_bit();
    assert_eq!(cr.load_bits(), 0x0000_0001);
    assert!(cr.aden.read_bit());
    assert!(cr.load().aden());
}

#[test]
fn multi_bit_field_round_trip() {
    host::wipe();
    let cr = unsafe { adc_cr::Reg::take() };
    cr.smp.write_bits(5);
    assert_eq!(cr.smp.read_bits(), 5);
    assert_eq!(cr.load().smp(), 5);
    assert_eq!(cr.load_bits(), 5 << 12);
    for value in 0..8 {
        cr.smp.write_bits(value);
        assert_eq!(cr.smp.read_bits(), value);
    }
}

#[test]
fn modify_preserves_other_bits() {
    host::wipe();
    let cr = unsafe { adc_cr::Reg::take() };
    cr.store_bits(0xFFFF_FFFF);
    cr.smp.write_bits(0);
    assert_eq!(cr.load_bits(), 0xFFFF_8FFF);
    cr.aden.clear_bit();
    assert_eq!(cr.load_bits(), 0xFFFF_8FFE);
    cr.modify(|r| r.set_aden().write_smp(2));
    assert_eq!(cr.load_bits(), 0xFFFF_AFFF);
    cr.addis.toggle_bit();
    assert_eq!(cr.load_bits(), 0xFFFF_AFFD);
}

#[test]
fn oversized_values_are_truncated() {
    host::wipe();
    let cr = unsafe { adc_cr::Reg::take() };
    cr.store_bits(0);
    cr.smp.write_bits(0b1101);
    assert_eq!(cr.smp.read_bits(), 0b101);
    assert_eq!(cr.load_bits(), 0b101 << 12);
    let mut val = cr.load();
    val.write_smp(u32::MAX);
    assert_eq!(val.bits(), 0b111 << 12);
    assert_eq!(cr.smp.max_bits(), 0b111);
}

#[test]
fn store_starts_from_reset_value() {
    host::wipe();
    let cr = unsafe { adc_cr::Reg::take() };
    cr.store_bits(0x0000_F00F);
    cr.store(|r| r.set_aden());
    assert_eq!(cr.load_bits(), 0x2000_0001);
    assert_eq!(cr.reset_val().bits(), 0x2000_0000);
    assert_eq!(<adc_cr::Reg as Reg>::RESET, adc_cr::RESET);
}

#[test]
fn read_only_field() {
    host::wipe();
    let cr = unsafe { adc_cr::Reg::take() };
    cr.store_bits(1 << 31);
    assert!(cr.adcal.read_bit());
    assert!(cr.load().adcal());
}

#[test]
fn write_only_register() {
    host::wipe();
    let icr = unsafe { tst_icr::Reg::take() };
    icr.store_bits(0xFFFF_FFFF);
    icr.clear.store_bit();
    assert_eq!(host::peek::<u32>(tst_icr::ADDRESS), 0x0000_0001);
    icr.code.store_bits(0x1A);
    assert_eq!(host::peek::<u32>(tst_icr::ADDRESS), 0x0000_00A0);
    icr.store(|r| r.set_clear().write_code(3));
    assert_eq!(host::peek::<u32>(tst_icr::ADDRESS), 0x0000_0031);
}

#[test]
fn half_word_register() {
    host::wipe();
    let half = unsafe { tst_half::Reg::take() };
    host::poke::<u32>(tst_half::ADDRESS, 0xDEAD_0000);
    half.store(|r| r.write_low(0xAB));
    assert_eq!(half.load_bits(), 0x07AB);
    assert_eq!(host::peek::<u32>(tst_half::ADDRESS), 0xDEAD_07AB);
    half.ds.write_bits(0xF);
    assert_eq!(half.load().ds(), 0xF);
    assert_eq!(half.load_bits(), 0x0FAB);
}

#[test]
fn full_width_field() {
    host::wipe();
    let word = unsafe { tst_word::Reg::take() };
    word.word.write_bits(0x1234_5678);
    assert_eq!(word.word.read_bits(), 0x1234_5678);
    assert_eq!(word.word.max_bits(), 0xFFFF_FFFF);
    word.store(|r| r);
    assert_eq!(word.load_bits(), 0xFFFF_FFFF);
}

#[test]
fn layout_metadata() {
    assert_eq!(adc_cr::ADDRESS, 0x5004_0008);
    assert_eq!(adc_cr::INFO.name, "CR");
    assert_eq!(adc_cr::INFO.size, 32);
    assert_eq!(adc_cr::INFO.reset, 0x2000_0000);
    assert_eq!(adc_cr::INFO.fields.len(), 5);
    let smp = adc_cr::INFO.field("SMP").unwrap();
    assert_eq!((smp.offset, smp.width), (12, 3));
    assert_eq!(smp.mask(), 0x0000_7000);
    assert_eq!(adc_cr::INFO.validate(), Ok(()));
    assert_eq!(tst_half::INFO.bytes(), 2);
}

#[test]
fn tokens_are_zero_sized() {
    assert_eq!(size_of::<adc_cr::Reg>(), 0);
    assert_eq!(size_of::<adc_cr::Aden>(), 0);
    assert_eq!(size_of::<adc_cr::Smp>(), 0);
    assert_eq!(size_of::<adc_cr::Val>(), 4);
    assert_eq!(size_of::<tst_half::Val>(), 2);
}

#[test]
fn raw_pointers() {
    let cr = unsafe { adc_cr::Reg::take() };
    assert_eq!(cr.as_ptr() as usize, 0x5004_0008);
    assert_eq!(cr.as_mut_ptr() as usize, 0x5004_0008);
    let half = unsafe { tst_half::Reg::take() };
    assert_eq!(half.as_ptr() as usize, tst_half::ADDRESS);
}
