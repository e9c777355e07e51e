use core::mem::size_of;
use drone_stm32l4x6_map::{
    map::core::scb_icsr,
    reg::mmio::host,
    vtable::{active_irq, default_handler, Handler, Irq, Vtable, IRQ_COUNT},
};

unsafe extern "C" fn tim2() {}

unsafe extern "C" fn usart1() {}

unsafe extern "C" fn exti15_10() {}

static VTABLE: Vtable = Vtable { tim2, exti15_10, ..Vtable::new() };

fn is_default(handler: Handler) -> bool {
    handler as usize == default_handler as Handler as usize
}

#[test]
fn line_count() {
    let expected = if cfg!(any(feature = "stm32l496", feature = "stm32l4a6")) { 91 } else { 82 };
    assert_eq!(IRQ_COUNT, expected);
    assert_eq!(size_of::<Vtable>(), IRQ_COUNT * size_of::<Handler>());
    assert_eq!(Irq::iter().count(), IRQ_COUNT);
}

#[test]
fn vendor_numbering() {
    let golden = [
        (Irq::Wwdg, 0, "WWDG"),
        (Irq::PvdPvm, 1, "PVD_PVM"),
        (Irq::Rcc, 5, "RCC"),
        (Irq::Exti0, 6, "EXTI0"),
        (Irq::Dma1Ch1, 11, "DMA1_CH1"),
        (Irq::Adc12, 18, "ADC1_2"),
        (Irq::Exti95, 23, "EXTI9_5"),
        (Irq::Tim2, 28, "TIM2"),
        (Irq::Usart1, 37, "USART1"),
        (Irq::Exti1510, 40, "EXTI15_10"),
        (Irq::Tim6Dacunder, 54, "TIM6_DACUNDER"),
        (Irq::OtgFs, 67, "OTG_FS"),
        (Irq::Lpuart1, 70, "LPUART1"),
        (Irq::Tsc, 77, "TSC"),
        (Irq::Fpu, 81, "FPU"),
    ];
    for (irq, number, name) in golden {
        assert_eq!(irq.number(), number);
        assert_eq!(irq.vector(), number + 16);
        assert_eq!(irq.name(), name);
        assert_eq!(Irq::from_number(number), Some(irq));
    }
}

#[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
#[test]
fn extended_lines() {
    let names = ["CRS", "I2C4_EV", "I2C4_ER", "DCMI", "CAN2_TX", "CAN2_RX0", "CAN2_RX1", "CAN2_SCE", "DMA2D"];
    for (number, name) in (82..).zip(names) {
        assert_eq!(Irq::from_number(number).map(Irq::name), Some(name));
    }
    assert_eq!(Irq::Crs.vector(), 98);
}

#[test]
fn lines_in_order() {
    for (i, irq) in Irq::iter().enumerate() {
        assert_eq!(usize::from(irq.number()), i);
    }
    assert_eq!(Irq::from_number(u16::try_from(IRQ_COUNT).unwrap()), None);
}

#[test]
fn from_vector() {
    assert_eq!(Irq::from_vector(15), None);
    assert_eq!(Irq::from_vector(0), None);
    assert_eq!(Irq::from_vector(16), Some(Irq::Wwdg));
    assert_eq!(Irq::from_vector(44), Some(Irq::Tim2));
}

#[test]
fn default_fill() {
    let vtable = Vtable::new();
    for irq in Irq::iter() {
        assert!(is_default(vtable.handler(irq)), "{}", irq.name());
    }
    let vtable = Vtable::default();
    assert!(is_default(vtable.handler(Irq::Fpu)));
}

#[test]
fn struct_update() {
    assert_eq!(VTABLE.handler(Irq::Tim2) as usize, tim2 as Handler as usize);
    assert_eq!(VTABLE.handler(Irq::Exti1510) as usize, exti15_10 as Handler as usize);
    assert!(is_default(VTABLE.handler(Irq::Tim3)));
    assert!(is_default(VTABLE.wwdg));
}

#[test]
fn set_at_run_time() {
    let mut vtable = Vtable::new();
    vtable.set(Irq::Usart1, usart1);
    assert_eq!(vtable.handler(Irq::Usart1) as usize, usart1 as Handler as usize);
    assert_eq!(vtable.usart1 as usize, usart1 as Handler as usize);
    assert!(is_default(vtable.handler(Irq::Usart2)));
    let slots = Irq::iter().filter(|&irq| !is_default(vtable.handler(irq))).count();
    assert_eq!(slots, 1);
}

#[test]
fn slot_layout() {
    let vtable = Vtable { usart1, ..Vtable::new() };
    let base = core::ptr::addr_of!(vtable) as usize;
    let slot = core::ptr::addr_of!(vtable.usart1) as usize;
    assert_eq!(slot - base, usize::from(Irq::Usart1.number()) * size_of::<Handler>());
}

#[test]
fn active_device_line() {
    host::wipe();
    host::poke::<u32>(scb_icsr::ADDRESS, 44);
    assert_eq!(active_irq(), Ok(Irq::Tim2));
    host::poke::<u32>(scb_icsr::ADDRESS, (1 << 22) | (12 << 12) | 16);
    assert_eq!(active_irq(), Ok(Irq::Wwdg));
}

#[test]
fn active_core_exception() {
    host::wipe();
    assert_eq!(active_irq(), Err(0));
    host::poke::<u32>(scb_icsr::ADDRESS, 3);
    assert_eq!(active_irq(), Err(3));
    host::poke::<u32>(scb_icsr::ADDRESS, 15);
    assert_eq!(active_irq(), Err(15));
}

#[test]
fn vector_past_the_table() {
    host::wipe();
    let vector = u32::try_from(IRQ_COUNT).unwrap() + 16;
    host::poke::<u32>(scb_icsr::ADDRESS, vector);
    assert_eq!(active_irq(), Err(u16::try_from(vector).unwrap()));
}

#[test]
fn crypto_and_random_lines() {
    assert_eq!(Irq::Aes.number(), 79);
    assert_eq!(Irq::Aes.name(), "AES");
    assert_eq!(Irq::Rng.number(), 80);
    assert_eq!(Irq::Rng.name(), "RNG");
    assert_eq!(Irq::from_vector(96), Some(Irq::Rng));
}
