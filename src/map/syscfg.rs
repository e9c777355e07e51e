crate::periph! {
    /// System configuration controller.
    pub struct SyscfgPeriph;

    SYSCFG 0x4001_0000;

    /// Memory remap register.
    MEMRMP {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Memory mapping selection.
        MEM_MODE { 0 3 RRRegField WWRegField }
        /// Flash bank mode selection.
        FB_MODE { 8 1 RRRegField WWRegField }
    }

    /// Configuration register 1.
    CFGR1 {
        0x04 0x20 0x7C00_0001 RReg WReg;
        /// Firewall disable.
        FWDIS { 0 1 RRRegField WWRegField }
        /// I/O analog switch voltage booster enable.
        BOOSTEN { 8 1 RRRegField WWRegField }
        I2C_PB6_FMP { 16 1 RRRegField WWRegField }
        I2C_PB7_FMP { 17 1 RRRegField WWRegField }
        I2C_PB8_FMP { 18 1 RRRegField WWRegField }
        I2C_PB9_FMP { 19 1 RRRegField WWRegField }
        I2C1_FMP { 20 1 RRRegField WWRegField }
        I2C2_FMP { 21 1 RRRegField WWRegField }
        I2C3_FMP { 22 1 RRRegField WWRegField }
        /// Floating point unit interrupts enable bits.
        FPU_IE { 26 6 RRRegField WWRegField }
    }

    /// External interrupt configuration register 1.
    EXTICR1 {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// EXTI 0 configuration bits.
        EXTI0 { 0 4 RRRegField WWRegField }
        /// EXTI 1 configuration bits.
        EXTI1 { 4 4 RRRegField WWRegField }
        /// EXTI 2 configuration bits.
        EXTI2 { 8 4 RRRegField WWRegField }
        /// EXTI 3 configuration bits.
        EXTI3 { 12 4 RRRegField WWRegField }
    }

    /// External interrupt configuration register 2.
    EXTICR2 {
        0x0C 0x20 0x0000_0000 RReg WReg;
        /// EXTI 4 configuration bits.
        EXTI4 { 0 4 RRRegField WWRegField }
        /// EXTI 5 configuration bits.
        EXTI5 { 4 4 RRRegField WWRegField }
        /// EXTI 6 configuration bits.
        EXTI6 { 8 4 RRRegField WWRegField }
        /// EXTI 7 configuration bits.
        EXTI7 { 12 4 RRRegField WWRegField }
    }

    /// External interrupt configuration register 3.
    EXTICR3 {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// EXTI 8 configuration bits.
        EXTI8 { 0 4 RRRegField WWRegField }
        /// EXTI 9 configuration bits.
        EXTI9 { 4 4 RRRegField WWRegField }
        /// EXTI 10 configuration bits.
        EXTI10 { 8 4 RRRegField WWRegField }
        /// EXTI 11 configuration bits.
        EXTI11 { 12 4 RRRegField WWRegField }
    }

    /// External interrupt configuration register 4.
    EXTICR4 {
        0x14 0x20 0x0000_0000 RReg WReg;
        /// EXTI 12 configuration bits.
        EXTI12 { 0 4 RRRegField WWRegField }
        /// EXTI 13 configuration bits.
        EXTI13 { 4 4 RRRegField WWRegField }
        /// EXTI 14 configuration bits.
        EXTI14 { 8 4 RRRegField WWRegField }
        /// EXTI 15 configuration bits.
        EXTI15 { 12 4 RRRegField WWRegField }
    }

    /// SRAM2 control and status register.
    SCSR {
        0x18 0x20 0x0000_0000 RReg WReg;
        /// SRAM2 erase.
        SRAM2ER { 0 1 RRRegField WWRegField }
        /// SRAM2 busy by erase operation.
        SRAM2BSY { 1 1 RRRegField RoRRegField }
    }

    /// Configuration register 2.
    CFGR2 {
        0x1C 0x20 0x0000_0000 RReg WReg;
        /// Cortex-M4 LOCKUP output enable.
        CLL { 0 1 RRRegField WWRegField }
        /// SRAM2 parity lock.
        SPL { 1 1 RRRegField WWRegField }
        /// PVD lock enable.
        PVDL { 2 1 RRRegField WWRegField }
        /// ECC lock.
        ECCL { 3 1 RRRegField WWRegField }
        /// SRAM2 parity error flag.
        SPF { 8 1 RRRegField WWRegField }
    }

    /// SRAM2 write protection register.
    SWPR {
        0x20 0x20 0x0000_0000 WReg WoReg;
        /// SRAM2 page 0 write protection.
        P0WP { 0 1 WWRegField WoWRegField }
        /// SRAM2 page 1 write protection.
        P1WP { 1 1 WWRegField WoWRegField }
        /// SRAM2 page 2 write protection.
        P2WP { 2 1 WWRegField WoWRegField }
        /// SRAM2 page 3 write protection.
        P3WP { 3 1 WWRegField WoWRegField }
        /// SRAM2 page 4 write protection.
        P4WP { 4 1 WWRegField WoWRegField }
        /// SRAM2 page 5 write protection.
        P5WP { 5 1 WWRegField WoWRegField }
        /// SRAM2 page 6 write protection.
        P6WP { 6 1 WWRegField WoWRegField }
        /// SRAM2 page 7 write protection.
        P7WP { 7 1 WWRegField WoWRegField }
        /// SRAM2 page 8 write protection.
        P8WP { 8 1 WWRegField WoWRegField }
        /// SRAM2 page 9 write protection.
        P9WP { 9 1 WWRegField WoWRegField }
        /// SRAM2 page 10 write protection.
        P10WP { 10 1 WWRegField WoWRegField }
        /// SRAM2 page 11 write protection.
        P11WP { 11 1 WWRegField WoWRegField }
        /// SRAM2 page 12 write protection.
        P12WP { 12 1 WWRegField WoWRegField }
        /// SRAM2 page 13 write protection.
        P13WP { 13 1 WWRegField WoWRegField }
        /// SRAM2 page 14 write protection.
        P14WP { 14 1 WWRegField WoWRegField }
        /// SRAM2 page 15 write protection.
        P15WP { 15 1 WWRegField WoWRegField }
        /// SRAM2 page 16 write protection.
        P16WP { 16 1 WWRegField WoWRegField }
        /// SRAM2 page 17 write protection.
        P17WP { 17 1 WWRegField WoWRegField }
        /// SRAM2 page 18 write protection.
        P18WP { 18 1 WWRegField WoWRegField }
        /// SRAM2 page 19 write protection.
        P19WP { 19 1 WWRegField WoWRegField }
        /// SRAM2 page 20 write protection.
        P20WP { 20 1 WWRegField WoWRegField }
        /// SRAM2 page 21 write protection.
        P21WP { 21 1 WWRegField WoWRegField }
        /// SRAM2 page 22 write protection.
        P22WP { 22 1 WWRegField WoWRegField }
        /// SRAM2 page 23 write protection.
        P23WP { 23 1 WWRegField WoWRegField }
        /// SRAM2 page 24 write protection.
        P24WP { 24 1 WWRegField WoWRegField }
        /// SRAM2 page 25 write protection.
        P25WP { 25 1 WWRegField WoWRegField }
        /// SRAM2 page 26 write protection.
        P26WP { 26 1 WWRegField WoWRegField }
        /// SRAM2 page 27 write protection.
        P27WP { 27 1 WWRegField WoWRegField }
        /// SRAM2 page 28 write protection.
        P28WP { 28 1 WWRegField WoWRegField }
        /// SRAM2 page 29 write protection.
        P29WP { 29 1 WWRegField WoWRegField }
        /// SRAM2 page 30 write protection.
        P30WP { 30 1 WWRegField WoWRegField }
        /// SRAM2 page 31 write protection.
        P31WP { 31 1 WWRegField WoWRegField }
    }

    /// SRAM2 key register.
    SKR {
        0x24 0x20 0x0000_0000 WReg WoReg;
        /// SRAM2 write protection key for software erase.
        KEY { 0 8 WWRegField WoWRegField }
    }

    /// SRAM2 write protection register 2.
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    SWPR2 {
        0x28 0x20 0x0000_0000 WReg WoReg;
        /// SRAM2 page 32 write protection.
        P32WP { 0 1 WWRegField WoWRegField }
        /// SRAM2 page 33 write protection.
        P33WP { 1 1 WWRegField WoWRegField }
        /// SRAM2 page 34 write protection.
        P34WP { 2 1 WWRegField WoWRegField }
        /// SRAM2 page 35 write protection.
        P35WP { 3 1 WWRegField WoWRegField }
        /// SRAM2 page 36 write protection.
        P36WP { 4 1 WWRegField WoWRegField }
        /// SRAM2 page 37 write protection.
        P37WP { 5 1 WWRegField WoWRegField }
        /// SRAM2 page 38 write protection.
        P38WP { 6 1 WWRegField WoWRegField }
        /// SRAM2 page 39 write protection.
        P39WP { 7 1 WWRegField WoWRegField }
        /// SRAM2 page 40 write protection.
        P40WP { 8 1 WWRegField WoWRegField }
        /// SRAM2 page 41 write protection.
        P41WP { 9 1 WWRegField WoWRegField }
        /// SRAM2 page 42 write protection.
        P42WP { 10 1 WWRegField WoWRegField }
        /// SRAM2 page 43 write protection.
        P43WP { 11 1 WWRegField WoWRegField }
        /// SRAM2 page 44 write protection.
        P44WP { 12 1 WWRegField WoWRegField }
        /// SRAM2 page 45 write protection.
        P45WP { 13 1 WWRegField WoWRegField }
        /// SRAM2 page 46 write protection.
        P46WP { 14 1 WWRegField WoWRegField }
        /// SRAM2 page 47 write protection.
        P47WP { 15 1 WWRegField WoWRegField }
        /// SRAM2 page 48 write protection.
        P48WP { 16 1 WWRegField WoWRegField }
        /// SRAM2 page 49 write protection.
        P49WP { 17 1 WWRegField WoWRegField }
        /// SRAM2 page 50 write protection.
        P50WP { 18 1 WWRegField WoWRegField }
        /// SRAM2 page 51 write protection.
        P51WP { 19 1 WWRegField WoWRegField }
        /// SRAM2 page 52 write protection.
        P52WP { 20 1 WWRegField WoWRegField }
        /// SRAM2 page 53 write protection.
        P53WP { 21 1 WWRegField WoWRegField }
        /// SRAM2 page 54 write protection.
        P54WP { 22 1 WWRegField WoWRegField }
        /// SRAM2 page 55 write protection.
        P55WP { 23 1 WWRegField WoWRegField }
        /// SRAM2 page 56 write protection.
        P56WP { 24 1 WWRegField WoWRegField }
        /// SRAM2 page 57 write protection.
        P57WP { 25 1 WWRegField WoWRegField }
        /// SRAM2 page 58 write protection.
        P58WP { 26 1 WWRegField WoWRegField }
        /// SRAM2 page 59 write protection.
        P59WP { 27 1 WWRegField WoWRegField }
        /// SRAM2 page 60 write protection.
        P60WP { 28 1 WWRegField WoWRegField }
        /// SRAM2 page 61 write protection.
        P61WP { 29 1 WWRegField WoWRegField }
        /// SRAM2 page 62 write protection.
        P62WP { 30 1 WWRegField WoWRegField }
        /// SRAM2 page 63 write protection.
        P63WP { 31 1 WWRegField WoWRegField }
    }
}
