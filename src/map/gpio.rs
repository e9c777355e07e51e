//! General-purpose I/Os.

crate::periph! {
    /// General-purpose I/Os.
    pub struct GpioPeriph;

    /// GPIO port A.
    GPIOA 0x4800_0000;
    /// GPIO port B.
    GPIOB 0x4800_0400;
    /// GPIO port C.
    GPIOC 0x4800_0800;
    /// GPIO port D.
    GPIOD 0x4800_0C00;
    /// GPIO port E.
    GPIOE 0x4800_1000;
    /// GPIO port F.
    GPIOF 0x4800_1400;
    /// GPIO port G.
    GPIOG 0x4800_1800;
    /// GPIO port H.
    GPIOH 0x4800_1C00;
    /// GPIO port I.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    GPIOI 0x4800_2000;

    /// GPIO port mode register.
    MODER {
        0x00 0x20 0xFFFF_FFFF RReg WReg;
        GPIOA 0xABFF_FFFF;
        GPIOB 0xFFFF_FEBF;
        GPIOH 0x0000_000F;
        /// Port configuration bits for pin 0.
        MODE0 { 0 2 RRRegField WWRegField }
        /// Port configuration bits for pin 1.
        MODE1 { 2 2 RRRegField WWRegField }
        /// Port configuration bits for pin 2.
        MODE2 { 4 2 RRRegField WWRegField }
        /// Port configuration bits for pin 3.
        MODE3 { 6 2 RRRegField WWRegField }
        /// Port configuration bits for pin 4.
        MODE4 { 8 2 RRRegField WWRegField }
        /// Port configuration bits for pin 5.
        MODE5 { 10 2 RRRegField WWRegField }
        /// Port configuration bits for pin 6.
        MODE6 { 12 2 RRRegField WWRegField }
        /// Port configuration bits for pin 7.
        MODE7 { 14 2 RRRegField WWRegField }
        /// Port configuration bits for pin 8.
        MODE8 { 16 2 RRRegField WWRegField }
        /// Port configuration bits for pin 9.
        MODE9 { 18 2 RRRegField WWRegField }
        /// Port configuration bits for pin 10.
        MODE10 { 20 2 RRRegField WWRegField }
        /// Port configuration bits for pin 11.
        MODE11 { 22 2 RRRegField WWRegField }
        /// Port configuration bits for pin 12.
        MODE12 { 24 2 RRRegField WWRegField }
        /// Port configuration bits for pin 13.
        MODE13 { 26 2 RRRegField WWRegField }
        /// Port configuration bits for pin 14.
        MODE14 { 28 2 RRRegField WWRegField }
        /// Port configuration bits for pin 15.
        MODE15 { 30 2 RRRegField WWRegField }
    }

    /// GPIO port output type register.
    OTYPER {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Port configuration bit for pin 0.
        OT0 { 0 1 RRRegField WWRegField }
        /// Port configuration bit for pin 1.
        OT1 { 1 1 RRRegField WWRegField }
        /// Port configuration bit for pin 2.
        OT2 { 2 1 RRRegField WWRegField }
        /// Port configuration bit for pin 3.
        OT3 { 3 1 RRRegField WWRegField }
        /// Port configuration bit for pin 4.
        OT4 { 4 1 RRRegField WWRegField }
        /// Port configuration bit for pin 5.
        OT5 { 5 1 RRRegField WWRegField }
        /// Port configuration bit for pin 6.
        OT6 { 6 1 RRRegField WWRegField }
        /// Port configuration bit for pin 7.
        OT7 { 7 1 RRRegField WWRegField }
        /// Port configuration bit for pin 8.
        OT8 { 8 1 RRRegField WWRegField }
        /// Port configuration bit for pin 9.
        OT9 { 9 1 RRRegField WWRegField }
        /// Port configuration bit for pin 10.
        OT10 { 10 1 RRRegField WWRegField }
        /// Port configuration bit for pin 11.
        OT11 { 11 1 RRRegField WWRegField }
        /// Port configuration bit for pin 12.
        OT12 { 12 1 RRRegField WWRegField }
        /// Port configuration bit for pin 13.
        OT13 { 13 1 RRRegField WWRegField }
        /// Port configuration bit for pin 14.
        OT14 { 14 1 RRRegField WWRegField }
        /// Port configuration bit for pin 15.
        OT15 { 15 1 RRRegField WWRegField }
    }

    /// GPIO port output speed register.
    OSPEEDR {
        0x08 0x20 0x0000_0000 RReg WReg;
        GPIOA 0x0C00_0000;
        /// Port configuration bits for pin 0.
        OSPEED0 { 0 2 RRRegField WWRegField }
        /// Port configuration bits for pin 1.
        OSPEED1 { 2 2 RRRegField WWRegField }
        /// Port configuration bits for pin 2.
        OSPEED2 { 4 2 RRRegField WWRegField }
        /// Port configuration bits for pin 3.
        OSPEED3 { 6 2 RRRegField WWRegField }
        /// Port configuration bits for pin 4.
        OSPEED4 { 8 2 RRRegField WWRegField }
        /// Port configuration bits for pin 5.
        OSPEED5 { 10 2 RRRegField WWRegField }
        /// Port configuration bits for pin 6.
        OSPEED6 { 12 2 RRRegField WWRegField }
        /// Port configuration bits for pin 7.
        OSPEED7 { 14 2 RRRegField WWRegField }
        /// Port configuration bits for pin 8.
        OSPEED8 { 16 2 RRRegField WWRegField }
        /// Port configuration bits for pin 9.
        OSPEED9 { 18 2 RRRegField WWRegField }
        /// Port configuration bits for pin 10.
        OSPEED10 { 20 2 RRRegField WWRegField }
        /// Port configuration bits for pin 11.
        OSPEED11 { 22 2 RRRegField WWRegField }
        /// Port configuration bits for pin 12.
        OSPEED12 { 24 2 RRRegField WWRegField }
        /// Port configuration bits for pin 13.
        OSPEED13 { 26 2 RRRegField WWRegField }
        /// Port configuration bits for pin 14.
        OSPEED14 { 28 2 RRRegField WWRegField }
        /// Port configuration bits for pin 15.
        OSPEED15 { 30 2 RRRegField WWRegField }
    }

    /// GPIO port pull-up/pull-down register.
    PUPDR {
        0x0C 0x20 0x0000_0000 RReg WReg;
        GPIOA 0x6400_0000;
        GPIOB 0x0000_0100;
        /// Port configuration bits for pin 0.
        PUPD0 { 0 2 RRRegField WWRegField }
        /// Port configuration bits for pin 1.
        PUPD1 { 2 2 RRRegField WWRegField }
        /// Port configuration bits for pin 2.
        PUPD2 { 4 2 RRRegField WWRegField }
        /// Port configuration bits for pin 3.
        PUPD3 { 6 2 RRRegField WWRegField }
        /// Port configuration bits for pin 4.
        PUPD4 { 8 2 RRRegField WWRegField }
        /// Port configuration bits for pin 5.
        PUPD5 { 10 2 RRRegField WWRegField }
        /// Port configuration bits for pin 6.
        PUPD6 { 12 2 RRRegField WWRegField }
        /// Port configuration bits for pin 7.
        PUPD7 { 14 2 RRRegField WWRegField }
        /// Port configuration bits for pin 8.
        PUPD8 { 16 2 RRRegField WWRegField }
        /// Port configuration bits for pin 9.
        PUPD9 { 18 2 RRRegField WWRegField }
        /// Port configuration bits for pin 10.
        PUPD10 { 20 2 RRRegField WWRegField }
        /// Port configuration bits for pin 11.
        PUPD11 { 22 2 RRRegField WWRegField }
        /// Port configuration bits for pin 12.
        PUPD12 { 24 2 RRRegField WWRegField }
        /// Port configuration bits for pin 13.
        PUPD13 { 26 2 RRRegField WWRegField }
        /// Port configuration bits for pin 14.
        PUPD14 { 28 2 RRRegField WWRegField }
        /// Port configuration bits for pin 15.
        PUPD15 { 30 2 RRRegField WWRegField }
    }

    /// GPIO port input data register.
    IDR {
        0x10 0x20 0x0000_0000 RReg RoReg;
        /// Port input data bit for pin 0.
        ID0 { 0 1 RRRegField RoRRegField }
        /// Port input data bit for pin 1.
        ID1 { 1 1 RRRegField RoRRegField }
        /// Port input data bit for pin 2.
        ID2 { 2 1 RRRegField RoRRegField }
        /// Port input data bit for pin 3.
        ID3 { 3 1 RRRegField RoRRegField }
        /// Port input data bit for pin 4.
        ID4 { 4 1 RRRegField RoRRegField }
        /// Port input data bit for pin 5.
        ID5 { 5 1 RRRegField RoRRegField }
        /// Port input data bit for pin 6.
        ID6 { 6 1 RRRegField RoRRegField }
        /// Port input data bit for pin 7.
        ID7 { 7 1 RRRegField RoRRegField }
        /// Port input data bit for pin 8.
        ID8 { 8 1 RRRegField RoRRegField }
        /// Port input data bit for pin 9.
        ID9 { 9 1 RRRegField RoRRegField }
        /// Port input data bit for pin 10.
        ID10 { 10 1 RRRegField RoRRegField }
        /// Port input data bit for pin 11.
        ID11 { 11 1 RRRegField RoRRegField }
        /// Port input data bit for pin 12.
        ID12 { 12 1 RRRegField RoRRegField }
        /// Port input data bit for pin 13.
        ID13 { 13 1 RRRegField RoRRegField }
        /// Port input data bit for pin 14.
        ID14 { 14 1 RRRegField RoRRegField }
        /// Port input data bit for pin 15.
        ID15 { 15 1 RRRegField RoRRegField }
    }

    /// GPIO port output data register.
    ODR {
        0x14 0x20 0x0000_0000 RReg WReg;
        /// Port output data bit for pin 0.
        OD0 { 0 1 RRRegField WWRegField }
        /// Port output data bit for pin 1.
        OD1 { 1 1 RRRegField WWRegField }
        /// Port output data bit for pin 2.
        OD2 { 2 1 RRRegField WWRegField }
        /// Port output data bit for pin 3.
        OD3 { 3 1 RRRegField WWRegField }
        /// Port output data bit for pin 4.
        OD4 { 4 1 RRRegField WWRegField }
        /// Port output data bit for pin 5.
        OD5 { 5 1 RRRegField WWRegField }
        /// Port output data bit for pin 6.
        OD6 { 6 1 RRRegField WWRegField }
        /// Port output data bit for pin 7.
        OD7 { 7 1 RRRegField WWRegField }
        /// Port output data bit for pin 8.
        OD8 { 8 1 RRRegField WWRegField }
        /// Port output data bit for pin 9.
        OD9 { 9 1 RRRegField WWRegField }
        /// Port output data bit for pin 10.
        OD10 { 10 1 RRRegField WWRegField }
        /// Port output data bit for pin 11.
        OD11 { 11 1 RRRegField WWRegField }
        /// Port output data bit for pin 12.
        OD12 { 12 1 RRRegField WWRegField }
        /// Port output data bit for pin 13.
        OD13 { 13 1 RRRegField WWRegField }
        /// Port output data bit for pin 14.
        OD14 { 14 1 RRRegField WWRegField }
        /// Port output data bit for pin 15.
        OD15 { 15 1 RRRegField WWRegField }
    }

    /// GPIO port bit set/reset register.
    BSRR {
        0x18 0x20 0x0000_0000 WReg WoReg;
        /// Port set bit for pin 0.
        BS0 { 0 1 WWRegField WoWRegField }
        /// Port set bit for pin 1.
        BS1 { 1 1 WWRegField WoWRegField }
        /// Port set bit for pin 2.
        BS2 { 2 1 WWRegField WoWRegField }
        /// Port set bit for pin 3.
        BS3 { 3 1 WWRegField WoWRegField }
        /// Port set bit for pin 4.
        BS4 { 4 1 WWRegField WoWRegField }
        /// Port set bit for pin 5.
        BS5 { 5 1 WWRegField WoWRegField }
        /// Port set bit for pin 6.
        BS6 { 6 1 WWRegField WoWRegField }
        /// Port set bit for pin 7.
        BS7 { 7 1 WWRegField WoWRegField }
        /// Port set bit for pin 8.
        BS8 { 8 1 WWRegField WoWRegField }
        /// Port set bit for pin 9.
        BS9 { 9 1 WWRegField WoWRegField }
        /// Port set bit for pin 10.
        BS10 { 10 1 WWRegField WoWRegField }
        /// Port set bit for pin 11.
        BS11 { 11 1 WWRegField WoWRegField }
        /// Port set bit for pin 12.
        BS12 { 12 1 WWRegField WoWRegField }
        /// Port set bit for pin 13.
        BS13 { 13 1 WWRegField WoWRegField }
        /// Port set bit for pin 14.
        BS14 { 14 1 WWRegField WoWRegField }
        /// Port set bit for pin 15.
        BS15 { 15 1 WWRegField WoWRegField }
        /// Port reset bit for pin 0.
        BR0 { 16 1 WWRegField WoWRegField }
        /// Port reset bit for pin 1.
        BR1 { 17 1 WWRegField WoWRegField }
        /// Port reset bit for pin 2.
        BR2 { 18 1 WWRegField WoWRegField }
        /// Port reset bit for pin 3.
        BR3 { 19 1 WWRegField WoWRegField }
        /// Port reset bit for pin 4.
        BR4 { 20 1 WWRegField WoWRegField }
        /// Port reset bit for pin 5.
        BR5 { 21 1 WWRegField WoWRegField }
        /// Port reset bit for pin 6.
        BR6 { 22 1 WWRegField WoWRegField }
        /// Port reset bit for pin 7.
        BR7 { 23 1 WWRegField WoWRegField }
        /// Port reset bit for pin 8.
        BR8 { 24 1 WWRegField WoWRegField }
        /// Port reset bit for pin 9.
        BR9 { 25 1 WWRegField WoWRegField }
        /// Port reset bit for pin 10.
        BR10 { 26 1 WWRegField WoWRegField }
        /// Port reset bit for pin 11.
        BR11 { 27 1 WWRegField WoWRegField }
        /// Port reset bit for pin 12.
        BR12 { 28 1 WWRegField WoWRegField }
        /// Port reset bit for pin 13.
        BR13 { 29 1 WWRegField WoWRegField }
        /// Port reset bit for pin 14.
        BR14 { 30 1 WWRegField WoWRegField }
        /// Port reset bit for pin 15.
        BR15 { 31 1 WWRegField WoWRegField }
    }

    /// GPIO port configuration lock register.
    LCKR {
        0x1C 0x20 0x0000_0000 RReg WReg;
        /// Port lock bit for pin 0.
        LCK0 { 0 1 RRRegField WWRegField }
        /// Port lock bit for pin 1.
        LCK1 { 1 1 RRRegField WWRegField }
        /// Port lock bit for pin 2.
        LCK2 { 2 1 RRRegField WWRegField }
        /// Port lock bit for pin 3.
        LCK3 { 3 1 RRRegField WWRegField }
        /// Port lock bit for pin 4.
        LCK4 { 4 1 RRRegField WWRegField }
        /// Port lock bit for pin 5.
        LCK5 { 5 1 RRRegField WWRegField }
        /// Port lock bit for pin 6.
        LCK6 { 6 1 RRRegField WWRegField }
        /// Port lock bit for pin 7.
        LCK7 { 7 1 RRRegField WWRegField }
        /// Port lock bit for pin 8.
        LCK8 { 8 1 RRRegField WWRegField }
        /// Port lock bit for pin 9.
        LCK9 { 9 1 RRRegField WWRegField }
        /// Port lock bit for pin 10.
        LCK10 { 10 1 RRRegField WWRegField }
        /// Port lock bit for pin 11.
        LCK11 { 11 1 RRRegField WWRegField }
        /// Port lock bit for pin 12.
        LCK12 { 12 1 RRRegField WWRegField }
        /// Port lock bit for pin 13.
        LCK13 { 13 1 RRRegField WWRegField }
        /// Port lock bit for pin 14.
        LCK14 { 14 1 RRRegField WWRegField }
        /// Port lock bit for pin 15.
        LCK15 { 15 1 RRRegField WWRegField }
        /// Lock key.
        LCKK { 16 1 RRRegField WWRegField }
    }

    /// GPIO alternate function low register.
    AFRL {
        0x20 0x20 0x0000_0000 RReg WReg;
        /// Alternate function selection for pin 0.
        AFSEL0 { 0 4 RRRegField WWRegField }
        /// Alternate function selection for pin 1.
        AFSEL1 { 4 4 RRRegField WWRegField }
        /// Alternate function selection for pin 2.
        AFSEL2 { 8 4 RRRegField WWRegField }
        /// Alternate function selection for pin 3.
        AFSEL3 { 12 4 RRRegField WWRegField }
        /// Alternate function selection for pin 4.
        AFSEL4 { 16 4 RRRegField WWRegField }
        /// Alternate function selection for pin 5.
        AFSEL5 { 20 4 RRRegField WWRegField }
        /// Alternate function selection for pin 6.
        AFSEL6 { 24 4 RRRegField WWRegField }
        /// Alternate function selection for pin 7.
        AFSEL7 { 28 4 RRRegField WWRegField }
    }

    /// GPIO alternate function high register.
    AFRH {
        0x24 0x20 0x0000_0000 RReg WReg;
        /// Alternate function selection for pin 8.
        AFSEL8 { 0 4 RRRegField WWRegField }
        /// Alternate function selection for pin 9.
        AFSEL9 { 4 4 RRRegField WWRegField }
        /// Alternate function selection for pin 10.
        AFSEL10 { 8 4 RRRegField WWRegField }
        /// Alternate function selection for pin 11.
        AFSEL11 { 12 4 RRRegField WWRegField }
        /// Alternate function selection for pin 12.
        AFSEL12 { 16 4 RRRegField WWRegField }
        /// Alternate function selection for pin 13.
        AFSEL13 { 20 4 RRRegField WWRegField }
        /// Alternate function selection for pin 14.
        AFSEL14 { 24 4 RRRegField WWRegField }
        /// Alternate function selection for pin 15.
        AFSEL15 { 28 4 RRRegField WWRegField }
    }

    /// GPIO port bit reset register.
    BRR {
        0x28 0x20 0x0000_0000 WReg WoReg;
        /// Port reset bit for pin 0.
        BR0 { 0 1 WWRegField WoWRegField }
        /// Port reset bit for pin 1.
        BR1 { 1 1 WWRegField WoWRegField }
        /// Port reset bit for pin 2.
        BR2 { 2 1 WWRegField WoWRegField }
        /// Port reset bit for pin 3.
        BR3 { 3 1 WWRegField WoWRegField }
        /// Port reset bit for pin 4.
        BR4 { 4 1 WWRegField WoWRegField }
        /// Port reset bit for pin 5.
        BR5 { 5 1 WWRegField WoWRegField }
        /// Port reset bit for pin 6.
        BR6 { 6 1 WWRegField WoWRegField }
        /// Port reset bit for pin 7.
        BR7 { 7 1 WWRegField WoWRegField }
        /// Port reset bit for pin 8.
        BR8 { 8 1 WWRegField WoWRegField }
        /// Port reset bit for pin 9.
        BR9 { 9 1 WWRegField WoWRegField }
        /// Port reset bit for pin 10.
        BR10 { 10 1 WWRegField WoWRegField }
        /// Port reset bit for pin 11.
        BR11 { 11 1 WWRegField WoWRegField }
        /// Port reset bit for pin 12.
        BR12 { 12 1 WWRegField WoWRegField }
        /// Port reset bit for pin 13.
        BR13 { 13 1 WWRegField WoWRegField }
        /// Port reset bit for pin 14.
        BR14 { 14 1 WWRegField WoWRegField }
        /// Port reset bit for pin 15.
        BR15 { 15 1 WWRegField WoWRegField }
    }

    /// GPIO port analog switch control register.
    ASCR {
        0x2C 0x20 0x0000_0000 RReg WReg;
        /// Connects analog switch to the ADC input for pin 0.
        ASC0 { 0 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 1.
        ASC1 { 1 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 2.
        ASC2 { 2 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 3.
        ASC3 { 3 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 4.
        ASC4 { 4 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 5.
        ASC5 { 5 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 6.
        ASC6 { 6 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 7.
        ASC7 { 7 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 8.
        ASC8 { 8 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 9.
        ASC9 { 9 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 10.
        ASC10 { 10 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 11.
        ASC11 { 11 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 12.
        ASC12 { 12 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 13.
        ASC13 { 13 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 14.
        ASC14 { 14 1 RRRegField WWRegField }
        /// Connects analog switch to the ADC input for pin 15.
        ASC15 { 15 1 RRRegField WWRegField }
    }
}
