use core::mem::size_of;
use drone_stm32l4x6_map::{
    map::{
        self, adc, core as cortex, dma_ch, gpio, rcc, syscfg, tim_adv, usart, Regs, INSTANCES,
        PERIPHS,
    },
    periph::Periph,
    reg::{mmio::host, prelude::*},
    token::Token,
};

fn base(name: &str) -> usize {
    INSTANCES
        .iter()
        .find(|instance| instance.name == name)
        .unwrap_or_else(|| panic!("missing instance {name}"))
        .base
}

fn has(name: &str) -> bool {
    INSTANCES.iter().any(|instance| instance.name == name)
}

#[test]
fn golden_base_addresses() {
    let golden = [
        ("TIM2", 0x4000_0000),
        ("TIM3", 0x4000_0400),
        ("TIM4", 0x4000_0800),
        ("TIM5", 0x4000_0C00),
        ("TIM6", 0x4000_1000),
        ("TIM7", 0x4000_1400),
        ("RTC", 0x4000_2800),
        ("WWDG", 0x4000_2C00),
        ("IWDG", 0x4000_3000),
        ("SPI2", 0x4000_3800),
        ("SPI3", 0x4000_3C00),
        ("USART2", 0x4000_4400),
        ("USART3", 0x4000_4800),
        ("UART4", 0x4000_4C00),
        ("UART5", 0x4000_5000),
        ("I2C1", 0x4000_5400),
        ("I2C2", 0x4000_5800),
        ("I2C3", 0x4000_5C00),
        ("CAN1", 0x4000_6400),
        ("PWR", 0x4000_7000),
        ("DAC1", 0x4000_7400),
        ("OPAMP", 0x4000_7800),
        ("LPTIM1", 0x4000_7C00),
        ("LPUART1", 0x4000_8000),
        ("SWPMI1", 0x4000_8800),
        ("LPTIM2", 0x4000_9400),
        ("SYSCFG", 0x4001_0000),
        ("VREFBUF", 0x4001_0030),
        ("COMP1", 0x4001_0200),
        ("COMP2", 0x4001_0204),
        ("EXTI", 0x4001_0400),
        ("FIREWALL", 0x4001_1C00),
        ("SDMMC1", 0x4001_2800),
        ("TIM1", 0x4001_2C00),
        ("SPI1", 0x4001_3000),
        ("TIM8", 0x4001_3400),
        ("USART1", 0x4001_3800),
        ("TIM15", 0x4001_4000),
        ("TIM16", 0x4001_4400),
        ("TIM17", 0x4001_4800),
        ("SAI1", 0x4001_5400),
        ("SAI1_A", 0x4001_5404),
        ("SAI1_B", 0x4001_5424),
        ("SAI2", 0x4001_5800),
        ("SAI2_A", 0x4001_5804),
        ("SAI2_B", 0x4001_5824),
        ("DFSDM1_CH0", 0x4001_6000),
        ("DFSDM1_CH7", 0x4001_60E0),
        ("DFSDM1_FLT0", 0x4001_6100),
        ("DFSDM1_FLT3", 0x4001_6280),
        ("DMA1", 0x4002_0000),
        ("DMA1_CH1", 0x4002_0008),
        ("DMA1_CH7", 0x4002_0080),
        ("DMA2", 0x4002_0400),
        ("DMA2_CH1", 0x4002_0408),
        ("DMA2_CH7", 0x4002_0480),
        ("RCC", 0x4002_1000),
        ("FLASH", 0x4002_2000),
        ("CRC", 0x4002_3000),
        ("TSC", 0x4002_4000),
        ("GPIOA", 0x4800_0000),
        ("GPIOB", 0x4800_0400),
        ("GPIOC", 0x4800_0800),
        ("GPIOD", 0x4800_0C00),
        ("GPIOE", 0x4800_1000),
        ("GPIOF", 0x4800_1400),
        ("GPIOG", 0x4800_1800),
        ("GPIOH", 0x4800_1C00),
        ("OTG_FS", 0x5000_0000),
        ("ADC1", 0x5004_0000),
        ("ADC2", 0x5004_0100),
        ("ADC3", 0x5004_0200),
        ("ADC123_COMMON", 0x5004_0300),
        ("RNG", 0x5006_0800),
        ("FMC", 0xA000_0000),
        ("QUADSPI", 0xA000_1000),
        ("DBGMCU", 0xE004_2000),
    ];
    for (name, address) in golden {
        assert_eq!(base(name), address, "{name}");
    }
    assert_eq!(gpio::GPIOA, 0x4800_0000);
    assert_eq!(rcc::RCC, 0x4002_1000);
    assert_eq!(usart::USART1, 0x4001_3800);
}

#[test]
fn variant_instances() {
    let l496 = cfg!(any(feature = "stm32l496", feature = "stm32l4a6"));
    for name in ["GPIOI", "I2C4", "CAN2", "CRS", "DCMI", "DMA2D"] {
        assert_eq!(has(name), l496, "{name}");
    }
    if l496 {
        assert_eq!(base("GPIOI"), 0x4800_2000);
        assert_eq!(base("I2C4"), 0x4000_8400);
        assert_eq!(base("CAN2"), 0x4000_6800);
        assert_eq!(base("CRS"), 0x4000_6000);
        assert_eq!(base("DCMI"), 0x5005_0000);
        assert_eq!(base("DMA2D"), 0x4002_B000);
    }
    let aes = cfg!(any(feature = "stm32l486", feature = "stm32l4a6"));
    assert_eq!(has("AES"), aes);
    if aes {
        assert_eq!(base("AES"), 0x5006_0000);
    }
    let hash = cfg!(feature = "stm32l4a6");
    assert_eq!(has("HASH"), hash);
    if hash {
        assert_eq!(base("HASH"), 0x5006_0400);
    }
    let lcd = cfg!(any(feature = "stm32l476", feature = "stm32l486"));
    assert_eq!(has("LCD"), lcd);
    if lcd {
        assert_eq!(base("LCD"), 0x4000_2400);
    }
}

#[test]
fn instances_are_sorted_and_unique() {
    for pair in INSTANCES.windows(2) {
        assert!(pair[0].base < pair[1].base, "{} / {}", pair[0].name, pair[1].name);
    }
    for (i, instance) in INSTANCES.iter().enumerate() {
        assert!(
            INSTANCES[..i].iter().all(|other| other.name != instance.name),
            "duplicate {}",
            instance.name
        );
    }
}

#[test]
fn layouts_are_consistent() {
    for periph in PERIPHS {
        if let Err(err) = periph.validate() {
            panic!("{err}");
        }
    }
    for instance in INSTANCES {
        assert!(PERIPHS.contains(instance.periph), "{}", instance.name);
    }
}

#[test]
fn instances_do_not_overlap() {
    let mut ranges = INSTANCES
        .iter()
        .flat_map(|instance| {
            instance
                .periph
                .regs
                .iter()
                .filter(|reg| reg.alias.is_none())
                .map(move |reg| {
                    let start = instance.base + reg.offset;
                    (start, start + reg.bytes(), instance.name, reg.name)
                })
        })
        .collect::<Vec<_>>();
    ranges.sort_unstable();
    for pair in ranges.windows(2) {
        let (_, end, periph, reg) = pair[0];
        let (start, _, next_periph, next_reg) = pair[1];
        assert!(end <= start, "{periph}.{reg} overlaps {next_periph}.{next_reg}");
    }
}

#[test]
fn register_addresses() {
    assert_eq!(<adc::cr::Reg<{ adc::ADC1 }> as Reg>::ADDRESS, 0x5004_0008);
    assert_eq!(<adc::Cr<{ adc::ADC2 }> as Reg>::RESET, 0x2000_0000);
    assert_eq!(<rcc::ahb2enr::Reg<{ rcc::RCC }> as Reg>::ADDRESS, 0x4002_104C);
    assert_eq!(<usart::brr::Reg<{ usart::USART2 }> as Reg>::ADDRESS, 0x4000_440C);
    assert_eq!(<dma_ch::cndtr::Reg<{ dma_ch::DMA2_CH3 }> as Reg>::ADDRESS, 0x4002_0434);
    assert_eq!(<gpio::bsrr::Reg<{ gpio::GPIOC }> as Reg>::ADDRESS, 0x4800_0818);
    assert_eq!(
        <tim_adv::ccmr1_input::Reg<{ tim_adv::TIM1 }> as Reg>::ADDRESS,
        <tim_adv::ccmr1_output::Reg<{ tim_adv::TIM1 }> as Reg>::ADDRESS,
    );
    let rtc = INSTANCES.iter().find(|instance| instance.name == "RTC").unwrap();
    assert_eq!(rtc.reg_address("BKP31R"), Some(0x4000_28CC));
    assert_eq!(rtc.reg_address("NOPE"), None);
    assert_eq!(cortex::itm_tcr::ADDRESS, 0xE000_0E80);
    assert_eq!(cortex::scb_icsr::ADDRESS, 0xE000_ED04);
    assert_eq!(cortex::dcb_demcr::ADDRESS, 0xE000_EDFC);
}

#[test]
fn gpio_reset_values() {
    assert_eq!(<gpio::moder::Reg<{ gpio::GPIOA }> as Reg>::RESET, 0xABFF_FFFF);
    assert_eq!(<gpio::moder::Reg<{ gpio::GPIOB }> as Reg>::RESET, 0xFFFF_FEBF);
    assert_eq!(<gpio::moder::Reg<{ gpio::GPIOC }> as Reg>::RESET, 0xFFFF_FFFF);
    assert_eq!(<gpio::moder::Reg<{ gpio::GPIOH }> as Reg>::RESET, 0x0000_000F);
}

#[test]
fn adc_enable_scenario() {
    host::wipe();
    let adc1 = unsafe { adc::Adc1::take() };
    adc1.cr.store_bits(0);
    adc1.cr.aden.set_bit();
    assert_eq!(adc1.cr.load_bits(), 0x0000_0001);
    assert_eq!(host::peek::<u32>(0x5004_0008), 0x0000_0001);
    assert_eq!(host::peek::<u32>(0x5004_0108), 0);
}

#[test]
fn gpio_port_setup() {
    host::wipe();
    let rcc = unsafe { rcc::Rcc::take() };
    let gpiob = unsafe { gpio::Gpiob::take() };
    rcc.ahb2enr.modify(|r| r.set_gpioben());
    gpiob.moder.store(|r| r.write_mode5(0b01));
    gpiob.bsrr.bs5.store_bit();
    assert_eq!(host::peek::<u32>(0x4002_104C), 1 << 1);
    assert_eq!(host::peek::<u32>(0x4800_0400), 0xFFFF_F6BF);
    assert_eq!(host::peek::<u32>(0x4800_0418), 1 << 5);
    assert_eq!(gpiob.moder.mode5.read_bits(), 0b01);
}

#[test]
fn token_index() {
    assert_eq!(size_of::<Regs>(), 0);
    let regs = unsafe { Regs::take() };
    let Regs { gpioa, tim2, .. } = regs;
    assert_eq!(size_of_val(&gpioa), 0);
    assert_eq!(<tim_adv::Tim1 as Periph>::INFO.name, "TIM_ADV");
    drop((gpioa, tim2));
    assert!(map::PERIPHS.iter().any(|periph| periph.name == "OTG_FS"));
}

fn size_of_val<T>(_: &T) -> usize {
    size_of::<T>()
}

#[test]
fn sram2_write_protection() {
    let syscfg = INSTANCES.iter().find(|instance| instance.name == "SYSCFG").unwrap();
    assert_eq!(syscfg.reg_address("SWPR"), Some(0x4001_0020));
    let l496 = cfg!(any(feature = "stm32l496", feature = "stm32l4a6"));
    assert_eq!(syscfg.reg_address("SWPR2").is_some(), l496);
    assert_eq!(syscfg::INFO.validate(), Ok(()));
}

#[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
#[test]
fn sram2_upper_pages() {
    host::wipe();
    assert_eq!(<syscfg::swpr2::Reg<{ syscfg::SYSCFG }> as Reg>::ADDRESS, 0x4001_0028);
    let info = syscfg::INFO.reg("SWPR2").unwrap();
    assert_eq!(info.field("P32WP").map(|field| field.offset), Some(0));
    assert_eq!(info.field("P63WP").map(|field| field.offset), Some(31));
    let syscfg = unsafe { syscfg::Syscfg::take() };
    syscfg.swpr2.store(|r| r.set_p40wp());
    assert_eq!(host::peek::<u32>(0x4001_0028), 1 << 8);
}
