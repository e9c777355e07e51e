//! Inter-integrated circuit interfaces.

crate::periph! {
    /// Inter-integrated circuit interface.
    pub struct I2cPeriph;

    I2C1 0x4000_5400;
    I2C2 0x4000_5800;
    I2C3 0x4000_5C00;
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    I2C4 0x4000_8400;

    /// Control register 1.
    CR1 {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Peripheral enable.
        PE { 0 1 RRRegField WWRegField }
        TXIE { 1 1 RRRegField WWRegField }
        RXIE { 2 1 RRRegField WWRegField }
        ADDRIE { 3 1 RRRegField WWRegField }
        NACKIE { 4 1 RRRegField WWRegField }
        STOPIE { 5 1 RRRegField WWRegField }
        TCIE { 6 1 RRRegField WWRegField }
        ERRIE { 7 1 RRRegField WWRegField }
        /// Digital noise filter.
        DNF { 8 4 RRRegField WWRegField }
        /// Analog noise filter OFF.
        ANFOFF { 12 1 RRRegField WWRegField }
        TXDMAEN { 14 1 RRRegField WWRegField }
        RXDMAEN { 15 1 RRRegField WWRegField }
        /// Slave byte control.
        SBC { 16 1 RRRegField WWRegField }
        NOSTRETCH { 17 1 RRRegField WWRegField }
        WUPEN { 18 1 RRRegField WWRegField }
        GCEN { 19 1 RRRegField WWRegField }
        SMBHEN { 20 1 RRRegField WWRegField }
        SMBDEN { 21 1 RRRegField WWRegField }
        ALERTEN { 22 1 RRRegField WWRegField }
        PECEN { 23 1 RRRegField WWRegField }
    }

    /// Control register 2.
    CR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Slave address.
        SADD { 0 10 RRRegField WWRegField }
        /// Transfer direction.
        RD_WRN { 10 1 RRRegField WWRegField }
        /// 10-bit addressing mode.
        ADD10 { 11 1 RRRegField WWRegField }
        HEAD10R { 12 1 RRRegField WWRegField }
        /// Start generation.
        START { 13 1 RRRegField WWRegField }
        /// Stop generation.
        STOP { 14 1 RRRegField WWRegField }
        NACK { 15 1 RRRegField WWRegField }
        /// Number of bytes.
        NBYTES { 16 8 RRRegField WWRegField }
        /// NBYTES reload mode.
        RELOAD { 24 1 RRRegField WWRegField }
        /// Automatic end mode.
        AUTOEND { 25 1 RRRegField WWRegField }
        PECBYTE { 26 1 RRRegField WWRegField }
    }

    /// Own address 1 register.
    OAR1 {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Interface own slave address.
        OA1 { 0 10 RRRegField WWRegField }
        OA1MODE { 10 1 RRRegField WWRegField }
        OA1EN { 15 1 RRRegField WWRegField }
    }

    /// Own address 2 register.
    OAR2 {
        0x0C 0x20 0x0000_0000 RReg WReg;
        OA2 { 1 7 RRRegField WWRegField }
        OA2MSK { 8 3 RRRegField WWRegField }
        OA2EN { 15 1 RRRegField WWRegField }
    }

    /// Timing register.
    TIMINGR {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// SCL low period.
        SCLL { 0 8 RRRegField WWRegField }
        /// SCL high period.
        SCLH { 8 8 RRRegField WWRegField }
        /// Data hold time.
        SDADEL { 16 4 RRRegField WWRegField }
        /// Data setup time.
        SCLDEL { 20 4 RRRegField WWRegField }
        /// Timing prescaler.
        PRESC { 28 4 RRRegField WWRegField }
    }

    /// Timeout register.
    TIMEOUTR {
        0x14 0x20 0x0000_0000 RReg WReg;
        TIMEOUTA { 0 12 RRRegField WWRegField }
        TIDLE { 12 1 RRRegField WWRegField }
        TIMOUTEN { 15 1 RRRegField WWRegField }
        TIMEOUTB { 16 12 RRRegField WWRegField }
        TEXTEN { 31 1 RRRegField WWRegField }
    }

    /// Interrupt and status register.
    ISR {
        0x18 0x20 0x0000_0001 RReg WReg;
        /// Transmit data register empty.
        TXE { 0 1 RRRegField WWRegField }
        /// Transmit interrupt status.
        TXIS { 1 1 RRRegField WWRegField }
        /// Receive data register not empty.
        RXNE { 2 1 RRRegField RoRRegField }
        ADDR { 3 1 RRRegField RoRRegField }
        /// Not Acknowledge received flag.
        NACKF { 4 1 RRRegField RoRRegField }
        /// Stop detection flag.
        STOPF { 5 1 RRRegField RoRRegField }
        /// Transfer complete.
        TC { 6 1 RRRegField RoRRegField }
        /// Transfer complete reload.
        TCR { 7 1 RRRegField RoRRegField }
        BERR { 8 1 RRRegField RoRRegField }
        ARLO { 9 1 RRRegField RoRRegField }
        OVR { 10 1 RRRegField RoRRegField }
        PECERR { 11 1 RRRegField RoRRegField }
        TIMEOUT { 12 1 RRRegField RoRRegField }
        ALERT { 13 1 RRRegField RoRRegField }
        /// Bus busy.
        BUSY { 15 1 RRRegField RoRRegField }
        DIR { 16 1 RRRegField RoRRegField }
        ADDCODE { 17 7 RRRegField RoRRegField }
    }

    /// Interrupt clear register.
    ICR {
        0x1C 0x20 0x0000_0000 WReg WoReg;
        ADDRCF { 3 1 WWRegField WoWRegField }
        NACKCF { 4 1 WWRegField WoWRegField }
        STOPCF { 5 1 WWRegField WoWRegField }
        BERRCF { 8 1 WWRegField WoWRegField }
        ARLOCF { 9 1 WWRegField WoWRegField }
        OVRCF { 10 1 WWRegField WoWRegField }
        PECCF { 11 1 WWRegField WoWRegField }
        TIMOUTCF { 12 1 WWRegField WoWRegField }
        ALERTCF { 13 1 WWRegField WoWRegField }
    }

    /// PEC register.
    PECR {
        0x20 0x20 0x0000_0000 RReg RoReg;
        PEC { 0 8 RRRegField RoRRegField }
    }

    /// Receive data register.
    RXDR {
        0x24 0x20 0x0000_0000 RReg RoReg;
        /// 8-bit receive data.
        RXDATA { 0 8 RRRegField RoRRegField }
    }

    /// Transmit data register.
    TXDR {
        0x28 0x20 0x0000_0000 RReg WReg;
        /// 8-bit transmit data.
        TXDATA { 0 8 RRRegField WWRegField }
    }
}
