//! Device interrupt vector table.
//!
//! [`Vtable`] holds one [`Handler`] per device interrupt line in vendor order
//! and follows the 16 core exception vectors in the full Cortex-M table. A
//! fresh table has every slot set to [`default_handler`]; firmware replaces
//! slots with struct-update syntax:
//!
//! ```
//! use drone_stm32l4x6_map::vtable::{Irq, Vtable};
//!
//! unsafe extern "C" fn tim2() {}
//!
//! static VTABLE: Vtable = Vtable { tim2, ..Vtable::new() };
//!
//! fn main() {
//!     assert_eq!(Irq::Tim2.number(), 28);
//!     assert_eq!(VTABLE.handler(Irq::Tim2) as usize, tim2 as usize);
//! }
//! ```
//!
//! or at run time, for tables relocated to RAM through `SCB_VTOR`, with
//! [`Vtable::set`].

use crate::{
    map::core::scb_icsr,
    reg::{mmio, RegVal},
};

/// Interrupt handler function.
pub type Handler = unsafe extern "C" fn();

crate::vtable! {
    /// STM32L4x6 device interrupt vector table.
    pub struct Vtable;
    /// STM32L4x6 device interrupt line.
    pub enum Irq;
    default => default_handler;

    /// Window watchdog interrupt.
    0: WWDG;
    /// PVD/PVM1/PVM2/PVM3/PVM4 through EXTI lines 16/35/36/37/38.
    1: PVD_PVM;
    /// RTC tamper or time stamp, CSS on LSE through EXTI line 19.
    2: RTC_TAMP_STAMP;
    /// RTC wakeup timer through EXTI line 20.
    3: RTC_WKUP;
    /// Flash global interrupt.
    4: FLASH;
    /// RCC global interrupt.
    5: RCC;
    /// EXTI line 0 interrupt.
    6: EXTI0;
    /// EXTI line 1 interrupt.
    7: EXTI1;
    /// EXTI line 2 interrupt.
    8: EXTI2;
    /// EXTI line 3 interrupt.
    9: EXTI3;
    /// EXTI line 4 interrupt.
    10: EXTI4;
    /// DMA1 channel 1 interrupt.
    11: DMA1_CH1;
    /// DMA1 channel 2 interrupt.
    12: DMA1_CH2;
    /// DMA1 channel 3 interrupt.
    13: DMA1_CH3;
    /// DMA1 channel 4 interrupt.
    14: DMA1_CH4;
    /// DMA1 channel 5 interrupt.
    15: DMA1_CH5;
    /// DMA1 channel 6 interrupt.
    16: DMA1_CH6;
    /// DMA1 channel 7 interrupt.
    17: DMA1_CH7;
    /// ADC1 and ADC2 global interrupt.
    18: ADC1_2;
    /// CAN1 TX interrupts.
    19: CAN1_TX;
    /// CAN1 RX0 interrupts.
    20: CAN1_RX0;
    /// CAN1 RX1 interrupt.
    21: CAN1_RX1;
    /// CAN1 SCE interrupt.
    22: CAN1_SCE;
    /// EXTI lines 9 to 5 interrupts.
    23: EXTI9_5;
    /// TIM1 break and TIM15 global interrupts.
    24: TIM1_BRK_TIM15;
    /// TIM1 update and TIM16 global interrupts.
    25: TIM1_UP_TIM16;
    /// TIM1 trigger and commutation, and TIM17 global interrupts.
    26: TIM1_TRG_COM_TIM17;
    /// TIM1 capture compare interrupt.
    27: TIM1_CC;
    /// TIM2 global interrupt.
    28: TIM2;
    /// TIM3 global interrupt.
    29: TIM3;
    /// TIM4 global interrupt.
    30: TIM4;
    /// I2C1 event interrupt.
    31: I2C1_EV;
    /// I2C1 error interrupt.
    32: I2C1_ER;
    /// I2C2 event interrupt.
    33: I2C2_EV;
    /// I2C2 error interrupt.
    34: I2C2_ER;
    /// SPI1 global interrupt.
    35: SPI1;
    /// SPI2 global interrupt.
    36: SPI2;
    /// USART1 global interrupt.
    37: USART1;
    /// USART2 global interrupt.
    38: USART2;
    /// USART3 global interrupt.
    39: USART3;
    /// EXTI lines 15 to 10 interrupts.
    40: EXTI15_10;
    /// RTC alarms A and B through EXTI line 18.
    41: RTC_ALARM;
    /// DFSDM1 filter 3 global interrupt.
    42: DFSDM1_FLT3;
    /// TIM8 break interrupt.
    43: TIM8_BRK;
    /// TIM8 update interrupt.
    44: TIM8_UP;
    /// TIM8 trigger and commutation interrupt.
    45: TIM8_TRG_COM;
    /// TIM8 capture compare interrupt.
    46: TIM8_CC;
    /// ADC3 global interrupt.
    47: ADC3;
    /// FMC global interrupt.
    48: FMC;
    /// SDMMC1 global interrupt.
    49: SDMMC1;
    /// TIM5 global interrupt.
    50: TIM5;
    /// SPI3 global interrupt.
    51: SPI3;
    /// UART4 global interrupt.
    52: UART4;
    /// UART5 global interrupt.
    53: UART5;
    /// TIM6 global and DAC1 underrun interrupts.
    54: TIM6_DACUNDER;
    /// TIM7 global interrupt.
    55: TIM7;
    /// DMA2 channel 1 interrupt.
    56: DMA2_CH1;
    /// DMA2 channel 2 interrupt.
    57: DMA2_CH2;
    /// DMA2 channel 3 interrupt.
    58: DMA2_CH3;
    /// DMA2 channel 4 interrupt.
    59: DMA2_CH4;
    /// DMA2 channel 5 interrupt.
    60: DMA2_CH5;
    /// DFSDM1 filter 0 global interrupt.
    61: DFSDM1_FLT0;
    /// DFSDM1 filter 1 global interrupt.
    62: DFSDM1_FLT1;
    /// DFSDM1 filter 2 global interrupt.
    63: DFSDM1_FLT2;
    /// COMP1 and COMP2 interrupts through EXTI lines 21/22.
    64: COMP;
    /// LPTIM1 global interrupt.
    65: LPTIM1;
    /// LPTIM2 global interrupt.
    66: LPTIM2;
    /// USB OTG FS global interrupt.
    67: OTG_FS;
    /// DMA2 channel 6 interrupt.
    68: DMA2_CH6;
    /// DMA2 channel 7 interrupt.
    69: DMA2_CH7;
    /// LPUART1 global interrupt.
    70: LPUART1;
    /// QUADSPI global interrupt.
    71: QUADSPI;
    /// I2C3 event interrupt.
    72: I2C3_EV;
    /// I2C3 error interrupt.
    73: I2C3_ER;
    /// SAI1 global interrupt.
    74: SAI1;
    /// SAI2 global interrupt.
    75: SAI2;
    /// SWPMI1 global interrupt.
    76: SWPMI1;
    /// TSC global interrupt.
    77: TSC;
    /// LCD global interrupt.
    78: LCD;
    /// AES global interrupt. Reserved on STM32L476 and STM32L496.
    79: AES;
    /// RNG global interrupt. Shared with HASH on STM32L4A6.
    80: RNG;
    /// Floating point interrupt.
    81: FPU;
    /// CRS global interrupt. Shared with HASH on STM32L4A6.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    82: CRS;
    /// I2C4 event interrupt.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    83: I2C4_EV;
    /// I2C4 error interrupt.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    84: I2C4_ER;
    /// DCMI global interrupt.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    85: DCMI;
    /// CAN2 TX interrupt.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    86: CAN2_TX;
    /// CAN2 RX0 interrupt.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    87: CAN2_RX0;
    /// CAN2 RX1 interrupt.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    88: CAN2_RX1;
    /// CAN2 SCE interrupt.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    89: CAN2_SCE;
    /// DMA2D global interrupt.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    90: DMA2D;
}

/// Returns the device interrupt line the processor is currently handling.
///
/// Decodes `SCB_ICSR.VECTACTIVE`. Core exceptions and thread mode yield the
/// raw exception number as the error.
pub fn active_irq() -> Result<Irq, u16> {
    let icsr = scb_icsr::Val::from_bits(unsafe { mmio::load(scb_icsr::ADDRESS) });
    let vector = u16::try_from(icsr.vectactive()).unwrap_or(u16::MAX);
    Irq::from_vector(vector).ok_or(vector)
}

/// Handler for interrupt lines without a dedicated handler.
///
/// Reports the active vector to the debug log and loops forever.
///
/// # Safety
///
/// Must be called only by the processor on exception entry.
pub unsafe extern "C" fn default_handler() {
    match active_irq() {
        Ok(irq) => {
            crate::eprintln!("unhandled interrupt {} ({})", irq.name(), irq.number());
        }
        Err(vector) => {
            crate::eprintln!("unhandled exception {}", vector);
        }
    }
    loop {
        core::hint::spin_loop();
    }
}

/// Places a [`Vtable`] static into the `.vectors.device` link section on
/// bare-metal targets, exported as the `DEVICE_VECTORS` symbol. The linker
/// script is expected to put the section right after the core exception
/// vectors.
///
/// ```
/// use drone_stm32l4x6_map::{device_vectors, vtable::Vtable};
///
/// unsafe extern "C" fn usart2() {}
///
/// device_vectors! {
///     /// Firmware vector table.
///     pub static VECTORS = Vtable { usart2, ..Vtable::new() };
/// }
///
/// fn main() {
///     assert_eq!(core::mem::size_of_val(&VECTORS), core::mem::size_of::<Vtable>());
/// }
/// ```
#[macro_export]
macro_rules! device_vectors {
    ($(#[$attr:meta])* $vis:vis static $ident:ident = $init:expr;) => {
        $(#[$attr])*
        #[cfg_attr(target_os = "none", link_section = ".vectors.device")]
        #[export_name = "DEVICE_VECTORS"]
        $vis static $ident: $crate::vtable::Vtable = $init;
    };
}
