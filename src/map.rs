//! STM32L4x6 peripheral map.
//!
//! Each submodule declares one peripheral layout together with all of its
//! instances. Instances absent from the selected chip variant are compiled
//! out. The [`core`] module holds the few Cortex-M core registers the crate
//! itself relies on.
//!
//! [`INSTANCES`] and [`PERIPHS`] describe the whole map at run time:
//!
//! ```
//! use drone_stm32l4x6_map::map::{self, INSTANCES};
//!
//! let gpioa = INSTANCES.iter().find(|instance| instance.name == "GPIOA").unwrap();
//! assert_eq!(gpioa.base, map::gpio::GPIOA);
//! assert_eq!(gpioa.reg_address("ODR"), Some(0x4800_0014));
//! ```

#![allow(missing_docs)]

use crate::periph::PeriphInfo;

pub mod adc;
pub mod adc_common;
pub mod aes;
pub mod can;
pub mod comp;
pub mod core;
pub mod crc;
pub mod crs;
pub mod dac;
pub mod dbgmcu;
pub mod dcmi;
pub mod dfsdm_ch;
pub mod dfsdm_flt;
pub mod dma;
pub mod dma2d;
pub mod dma_ch;
pub mod exti;
pub mod firewall;
pub mod flash;
pub mod fmc;
pub mod gpio;
pub mod hash;
pub mod i2c;
pub mod iwdg;
pub mod lcd;
pub mod lptim;
pub mod lpuart;
pub mod opamp;
pub mod otg_fs;
pub mod pwr;
pub mod quadspi;
pub mod rcc;
pub mod rng;
pub mod rtc;
pub mod sai;
pub mod sai_block;
pub mod sdmmc;
pub mod spi;
pub mod swpmi;
pub mod syscfg;
pub mod tim15;
pub mod tim16;
pub mod tim_adv;
pub mod tim_basic;
pub mod tim_gp;
pub mod tsc;
pub mod usart;
pub mod vrefbuf;
pub mod wwdg;

/// Peripheral instance of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instance {
    /// Vendor name of the instance.
    pub name: &'static str,
    /// Base address of the instance.
    pub base: usize,
    /// Layout of the instance.
    pub periph: &'static PeriphInfo,
}

impl Instance {
    /// Returns the absolute address of the register named `name`.
    pub fn reg_address(&self, name: &str) -> Option<usize> {
        self.periph.reg(name).map(|reg| self.base + reg.offset)
    }
}

/// Every peripheral instance of the selected chip variant, ordered by base
/// address.
pub const INSTANCES: &[Instance] = &[
    Instance { name: "TIM2", base: tim_gp::TIM2, periph: &tim_gp::INFO },
    Instance { name: "TIM3", base: tim_gp::TIM3, periph: &tim_gp::INFO },
    Instance { name: "TIM4", base: tim_gp::TIM4, periph: &tim_gp::INFO },
    Instance { name: "TIM5", base: tim_gp::TIM5, periph: &tim_gp::INFO },
    Instance { name: "TIM6", base: tim_basic::TIM6, periph: &tim_basic::INFO },
    Instance { name: "TIM7", base: tim_basic::TIM7, periph: &tim_basic::INFO },
    #[cfg(any(feature = "stm32l476", feature = "stm32l486"))]
    Instance { name: "LCD", base: lcd::LCD, periph: &lcd::INFO },
    Instance { name: "RTC", base: rtc::RTC, periph: &rtc::INFO },
    Instance { name: "WWDG", base: wwdg::WWDG, periph: &wwdg::INFO },
    Instance { name: "IWDG", base: iwdg::IWDG, periph: &iwdg::INFO },
    Instance { name: "SPI2", base: spi::SPI2, periph: &spi::INFO },
    Instance { name: "SPI3", base: spi::SPI3, periph: &spi::INFO },
    Instance { name: "USART2", base: usart::USART2, periph: &usart::INFO },
    Instance { name: "USART3", base: usart::USART3, periph: &usart::INFO },
    Instance { name: "UART4", base: usart::UART4, periph: &usart::INFO },
    Instance { name: "UART5", base: usart::UART5, periph: &usart::INFO },
    Instance { name: "I2C1", base: i2c::I2C1, periph: &i2c::INFO },
    Instance { name: "I2C2", base: i2c::I2C2, periph: &i2c::INFO },
    Instance { name: "I2C3", base: i2c::I2C3, periph: &i2c::INFO },
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    Instance { name: "CRS", base: crs::CRS, periph: &crs::INFO },
    Instance { name: "CAN1", base: can::CAN1, periph: &can::INFO },
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    Instance { name: "CAN2", base: can::CAN2, periph: &can::INFO },
    Instance { name: "PWR", base: pwr::PWR, periph: &pwr::INFO },
    Instance { name: "DAC1", base: dac::DAC1, periph: &dac::INFO },
    Instance { name: "OPAMP", base: opamp::OPAMP, periph: &opamp::INFO },
    Instance { name: "LPTIM1", base: lptim::LPTIM1, periph: &lptim::INFO },
    Instance { name: "LPUART1", base: lpuart::LPUART1, periph: &lpuart::INFO },
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    Instance { name: "I2C4", base: i2c::I2C4, periph: &i2c::INFO },
    Instance { name: "SWPMI1", base: swpmi::SWPMI1, periph: &swpmi::INFO },
    Instance { name: "LPTIM2", base: lptim::LPTIM2, periph: &lptim::INFO },
    Instance { name: "SYSCFG", base: syscfg::SYSCFG, periph: &syscfg::INFO },
    Instance { name: "VREFBUF", base: vrefbuf::VREFBUF, periph: &vrefbuf::INFO },
    Instance { name: "COMP1", base: comp::COMP1, periph: &comp::INFO },
    Instance { name: "COMP2", base: comp::COMP2, periph: &comp::INFO },
    Instance { name: "EXTI", base: exti::EXTI, periph: &exti::INFO },
    Instance { name: "FIREWALL", base: firewall::FIREWALL, periph: &firewall::INFO },
    Instance { name: "SDMMC1", base: sdmmc::SDMMC1, periph: &sdmmc::INFO },
    Instance { name: "TIM1", base: tim_adv::TIM1, periph: &tim_adv::INFO },
    Instance { name: "SPI1", base: spi::SPI1, periph: &spi::INFO },
    Instance { name: "TIM8", base: tim_adv::TIM8, periph: &tim_adv::INFO },
    Instance { name: "USART1", base: usart::USART1, periph: &usart::INFO },
    Instance { name: "TIM15", base: tim15::TIM15, periph: &tim15::INFO },
    Instance { name: "TIM16", base: tim16::TIM16, periph: &tim16::INFO },
    Instance { name: "TIM17", base: tim16::TIM17, periph: &tim16::INFO },
    Instance { name: "SAI1", base: sai::SAI1, periph: &sai::INFO },
    Instance { name: "SAI1_A", base: sai_block::SAI1_A, periph: &sai_block::INFO },
    Instance { name: "SAI1_B", base: sai_block::SAI1_B, periph: &sai_block::INFO },
    Instance { name: "SAI2", base: sai::SAI2, periph: &sai::INFO },
    Instance { name: "SAI2_A", base: sai_block::SAI2_A, periph: &sai_block::INFO },
    Instance { name: "SAI2_B", base: sai_block::SAI2_B, periph: &sai_block::INFO },
    Instance { name: "DFSDM1_CH0", base: dfsdm_ch::DFSDM1_CH0, periph: &dfsdm_ch::INFO },
    Instance { name: "DFSDM1_CH1", base: dfsdm_ch::DFSDM1_CH1, periph: &dfsdm_ch::INFO },
    Instance { name: "DFSDM1_CH2", base: dfsdm_ch::DFSDM1_CH2, periph: &dfsdm_ch::INFO },
    Instance { name: "DFSDM1_CH3", base: dfsdm_ch::DFSDM1_CH3, periph: &dfsdm_ch::INFO },
    Instance { name: "DFSDM1_CH4", base: dfsdm_ch::DFSDM1_CH4, periph: &dfsdm_ch::INFO },
    Instance { name: "DFSDM1_CH5", base: dfsdm_ch::DFSDM1_CH5, periph: &dfsdm_ch::INFO },
    Instance { name: "DFSDM1_CH6", base: dfsdm_ch::DFSDM1_CH6, periph: &dfsdm_ch::INFO },
    Instance { name: "DFSDM1_CH7", base: dfsdm_ch::DFSDM1_CH7, periph: &dfsdm_ch::INFO },
    Instance { name: "DFSDM1_FLT0", base: dfsdm_flt::DFSDM1_FLT0, periph: &dfsdm_flt::INFO },
    Instance { name: "DFSDM1_FLT1", base: dfsdm_flt::DFSDM1_FLT1, periph: &dfsdm_flt::INFO },
    Instance { name: "DFSDM1_FLT2", base: dfsdm_flt::DFSDM1_FLT2, periph: &dfsdm_flt::INFO },
    Instance { name: "DFSDM1_FLT3", base: dfsdm_flt::DFSDM1_FLT3, periph: &dfsdm_flt::INFO },
    Instance { name: "DMA1", base: dma::DMA1, periph: &dma::INFO },
    Instance { name: "DMA1_CH1", base: dma_ch::DMA1_CH1, periph: &dma_ch::INFO },
    Instance { name: "DMA1_CH2", base: dma_ch::DMA1_CH2, periph: &dma_ch::INFO },
    Instance { name: "DMA1_CH3", base: dma_ch::DMA1_CH3, periph: &dma_ch::INFO },
    Instance { name: "DMA1_CH4", base: dma_ch::DMA1_CH4, periph: &dma_ch::INFO },
    Instance { name: "DMA1_CH5", base: dma_ch::DMA1_CH5, periph: &dma_ch::INFO },
    Instance { name: "DMA1_CH6", base: dma_ch::DMA1_CH6, periph: &dma_ch::INFO },
    Instance { name: "DMA1_CH7", base: dma_ch::DMA1_CH7, periph: &dma_ch::INFO },
    Instance { name: "DMA2", base: dma::DMA2, periph: &dma::INFO },
    Instance { name: "DMA2_CH1", base: dma_ch::DMA2_CH1, periph: &dma_ch::INFO },
    Instance { name: "DMA2_CH2", base: dma_ch::DMA2_CH2, periph: &dma_ch::INFO },
    Instance { name: "DMA2_CH3", base: dma_ch::DMA2_CH3, periph: &dma_ch::INFO },
    Instance { name: "DMA2_CH4", base: dma_ch::DMA2_CH4, periph: &dma_ch::INFO },
    Instance { name: "DMA2_CH5", base: dma_ch::DMA2_CH5, periph: &dma_ch::INFO },
    Instance { name: "DMA2_CH6", base: dma_ch::DMA2_CH6, periph: &dma_ch::INFO },
    Instance { name: "DMA2_CH7", base: dma_ch::DMA2_CH7, periph: &dma_ch::INFO },
    Instance { name: "RCC", base: rcc::RCC, periph: &rcc::INFO },
    Instance { name: "FLASH", base: flash::FLASH, periph: &flash::INFO },
    Instance { name: "CRC", base: crc::CRC, periph: &crc::INFO },
    Instance { name: "TSC", base: tsc::TSC, periph: &tsc::INFO },
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    Instance { name: "DMA2D", base: dma2d::DMA2D, periph: &dma2d::INFO },
    Instance { name: "GPIOA", base: gpio::GPIOA, periph: &gpio::INFO },
    Instance { name: "GPIOB", base: gpio::GPIOB, periph: &gpio::INFO },
    Instance { name: "GPIOC", base: gpio::GPIOC, periph: &gpio::INFO },
    Instance { name: "GPIOD", base: gpio::GPIOD, periph: &gpio::INFO },
    Instance { name: "GPIOE", base: gpio::GPIOE, periph: &gpio::INFO },
    Instance { name: "GPIOF", base: gpio::GPIOF, periph: &gpio::INFO },
    Instance { name: "GPIOG", base: gpio::GPIOG, periph: &gpio::INFO },
    Instance { name: "GPIOH", base: gpio::GPIOH, periph: &gpio::INFO },
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    Instance { name: "GPIOI", base: gpio::GPIOI, periph: &gpio::INFO },
    Instance { name: "OTG_FS", base: otg_fs::OTG_FS, periph: &otg_fs::INFO },
    Instance { name: "ADC1", base: adc::ADC1, periph: &adc::INFO },
    Instance { name: "ADC2", base: adc::ADC2, periph: &adc::INFO },
    Instance { name: "ADC3", base: adc::ADC3, periph: &adc::INFO },
    Instance { name: "ADC123_COMMON", base: adc_common::ADC123_COMMON, periph: &adc_common::INFO },
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    Instance { name: "DCMI", base: dcmi::DCMI, periph: &dcmi::INFO },
    #[cfg(any(feature = "stm32l486", feature = "stm32l4a6"))]
    Instance { name: "AES", base: aes::AES, periph: &aes::INFO },
    #[cfg(feature = "stm32l4a6")]
    Instance { name: "HASH", base: hash::HASH, periph: &hash::INFO },
    Instance { name: "RNG", base: rng::RNG, periph: &rng::INFO },
    Instance { name: "FMC", base: fmc::FMC, periph: &fmc::INFO },
    Instance { name: "QUADSPI", base: quadspi::QUADSPI, periph: &quadspi::INFO },
    Instance { name: "DBGMCU", base: dbgmcu::DBGMCU, periph: &dbgmcu::INFO },
];

/// Every peripheral layout of the map.
pub const PERIPHS: &[PeriphInfo] = &[
    adc::INFO,
    adc_common::INFO,
    aes::INFO,
    can::INFO,
    comp::INFO,
    crc::INFO,
    crs::INFO,
    dac::INFO,
    dbgmcu::INFO,
    dcmi::INFO,
    dfsdm_ch::INFO,
    dfsdm_flt::INFO,
    dma::INFO,
    dma2d::INFO,
    dma_ch::INFO,
    exti::INFO,
    firewall::INFO,
    flash::INFO,
    fmc::INFO,
    gpio::INFO,
    hash::INFO,
    i2c::INFO,
    iwdg::INFO,
    lcd::INFO,
    lptim::INFO,
    lpuart::INFO,
    opamp::INFO,
    otg_fs::INFO,
    pwr::INFO,
    quadspi::INFO,
    rcc::INFO,
    rng::INFO,
    rtc::INFO,
    sai::INFO,
    sai_block::INFO,
    sdmmc::INFO,
    spi::INFO,
    swpmi::INFO,
    syscfg::INFO,
    tim15::INFO,
    tim16::INFO,
    tim_adv::INFO,
    tim_basic::INFO,
    tim_gp::INFO,
    tsc::INFO,
    usart::INFO,
    vrefbuf::INFO,
    wwdg::INFO,
];

crate::unsafe_simple_tokens! {
    /// Tokens of every peripheral instance of the selected chip variant.
    pub struct Regs {
        tim2: tim_gp::Tim2,
        tim3: tim_gp::Tim3,
        tim4: tim_gp::Tim4,
        tim5: tim_gp::Tim5,
        tim6: tim_basic::Tim6,
        tim7: tim_basic::Tim7,
        #[cfg(any(feature = "stm32l476", feature = "stm32l486"))]
        lcd: lcd::Lcd,
        rtc: rtc::Rtc,
        wwdg: wwdg::Wwdg,
        iwdg: iwdg::Iwdg,
        spi2: spi::Spi2,
        spi3: spi::Spi3,
        usart2: usart::Usart2,
        usart3: usart::Usart3,
        uart4: usart::Uart4,
        uart5: usart::Uart5,
        i2c1: i2c::I2C1,
        i2c2: i2c::I2C2,
        i2c3: i2c::I2C3,
        #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
        crs: crs::Crs,
        can1: can::Can1,
        #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
        can2: can::Can2,
        pwr: pwr::Pwr,
        dac1: dac::Dac1,
        opamp: opamp::Opamp,
        lptim1: lptim::Lptim1,
        lpuart1: lpuart::Lpuart1,
        #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
        i2c4: i2c::I2C4,
        swpmi1: swpmi::Swpmi1,
        lptim2: lptim::Lptim2,
        syscfg: syscfg::Syscfg,
        vrefbuf: vrefbuf::Vrefbuf,
        comp1: comp::Comp1,
        comp2: comp::Comp2,
        exti: exti::Exti,
        firewall: firewall::Firewall,
        sdmmc1: sdmmc::Sdmmc1,
        tim1: tim_adv::Tim1,
        spi1: spi::Spi1,
        tim8: tim_adv::Tim8,
        usart1: usart::Usart1,
        tim15: tim15::Tim15,
        tim16: tim16::Tim16,
        tim17: tim16::Tim17,
        sai1: sai::Sai1,
        sai1_a: sai_block::Sai1A,
        sai1_b: sai_block::Sai1B,
        sai2: sai::Sai2,
        sai2_a: sai_block::Sai2A,
        sai2_b: sai_block::Sai2B,
        dfsdm1_ch0: dfsdm_ch::Dfsdm1Ch0,
        dfsdm1_ch1: dfsdm_ch::Dfsdm1Ch1,
        dfsdm1_ch2: dfsdm_ch::Dfsdm1Ch2,
        dfsdm1_ch3: dfsdm_ch::Dfsdm1Ch3,
        dfsdm1_ch4: dfsdm_ch::Dfsdm1Ch4,
        dfsdm1_ch5: dfsdm_ch::Dfsdm1Ch5,
        dfsdm1_ch6: dfsdm_ch::Dfsdm1Ch6,
        dfsdm1_ch7: dfsdm_ch::Dfsdm1Ch7,
        dfsdm1_flt0: dfsdm_flt::Dfsdm1Flt0,
        dfsdm1_flt1: dfsdm_flt::Dfsdm1Flt1,
        dfsdm1_flt2: dfsdm_flt::Dfsdm1Flt2,
        dfsdm1_flt3: dfsdm_flt::Dfsdm1Flt3,
        dma1: dma::Dma1,
        dma1_ch1: dma_ch::Dma1Ch1,
        dma1_ch2: dma_ch::Dma1Ch2,
        dma1_ch3: dma_ch::Dma1Ch3,
        dma1_ch4: dma_ch::Dma1Ch4,
        dma1_ch5: dma_ch::Dma1Ch5,
        dma1_ch6: dma_ch::Dma1Ch6,
        dma1_ch7: dma_ch::Dma1Ch7,
        dma2: dma::Dma2,
        dma2_ch1: dma_ch::Dma2Ch1,
        dma2_ch2: dma_ch::Dma2Ch2,
        dma2_ch3: dma_ch::Dma2Ch3,
        dma2_ch4: dma_ch::Dma2Ch4,
        dma2_ch5: dma_ch::Dma2Ch5,
        dma2_ch6: dma_ch::Dma2Ch6,
        dma2_ch7: dma_ch::Dma2Ch7,
        rcc: rcc::Rcc,
        flash: flash::Flash,
        crc: crc::Crc,
        tsc: tsc::Tsc,
        #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
        dma2d: dma2d::Dma2D,
        gpioa: gpio::Gpioa,
        gpiob: gpio::Gpiob,
        gpioc: gpio::Gpioc,
        gpiod: gpio::Gpiod,
        gpioe: gpio::Gpioe,
        gpiof: gpio::Gpiof,
        gpiog: gpio::Gpiog,
        gpioh: gpio::Gpioh,
        #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
        gpioi: gpio::Gpioi,
        otg_fs: otg_fs::OtgFs,
        adc1: adc::Adc1,
        adc2: adc::Adc2,
        adc3: adc::Adc3,
        adc123_common: adc_common::Adc123Common,
        #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
        dcmi: dcmi::Dcmi,
        #[cfg(any(feature = "stm32l486", feature = "stm32l4a6"))]
        aes: aes::Aes,
        #[cfg(feature = "stm32l4a6")]
        hash: hash::Hash,
        rng: rng::Rng,
        fmc: fmc::Fmc,
        quadspi: quadspi::Quadspi,
        dbgmcu: dbgmcu::Dbgmcu,
    }
}
