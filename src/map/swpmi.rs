crate::periph! {
    /// Single wire protocol master interface.
    pub struct SwpmiPeriph;

    SWPMI1 0x4000_8800;

    /// Configuration/control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        RXDMA { 0 1 RRRegField WWRegField }
        TXDMA { 1 1 RRRegField WWRegField }
        /// Reception buffering mode.
        RXMODE { 2 1 RRRegField WWRegField }
        /// Transmission buffering mode.
        TXMODE { 3 1 RRRegField WWRegField }
        /// Loopback mode enable.
        LPBK { 4 1 RRRegField WWRegField }
        /// Single wire protocol master interface activate.
        SWPACT { 5 1 RRRegField WWRegField }
        /// Single wire protocol master interface deactivate.
        DEACT { 10 1 RRRegField WWRegField }
    }

    /// Bitrate register.
    BRR {
        0x04 0x20 0x0000_0001 RReg WReg;
        /// Bitrate prescaler.
        BR { 0 8 RRRegField WWRegField }
    }

    /// Interrupt and status register.
    ISR {
        0x0C 0x20 0x0000_02C2 RReg RoReg;
        RXBFF { 0 1 RRRegField RoRRegField }
        TXBEF { 1 1 RRRegField RoRRegField }
        RXBERF { 2 1 RRRegField RoRRegField }
        RXOVRF { 3 1 RRRegField RoRRegField }
        TXUNRF { 4 1 RRRegField RoRRegField }
        RXNE { 5 1 RRRegField RoRRegField }
        TXE { 6 1 RRRegField RoRRegField }
        TCF { 7 1 RRRegField RoRRegField }
        SRF { 8 1 RRRegField RoRRegField }
        SUSP { 9 1 RRRegField RoRRegField }
        DEACTF { 10 1 RRRegField RoRRegField }
    }

    /// Interrupt flag clear register.
    ICR {
        0x10 0x20 0x0000_0000 WReg WoReg;
        CRXBFF { 0 1 WWRegField WoWRegField }
        CTXBEF { 1 1 WWRegField WoWRegField }
        CRXBERF { 2 1 WWRegField WoWRegField }
        CRXOVRF { 3 1 WWRegField WoWRegField }
        CTXUNRF { 4 1 WWRegField WoWRegField }
        CTCF { 7 1 WWRegField WoWRegField }
        CSRF { 8 1 WWRegField WoWRegField }
    }

    /// Interrupt enable register.
    IER {
        0x14 0x20 0x0000_0000 RReg WReg;
        RXBFIE { 0 1 RRRegField WWRegField }
        TXBEIE { 1 1 RRRegField WWRegField }
        RXBERIE { 2 1 RRRegField WWRegField }
        RXOVRIE { 3 1 RRRegField WWRegField }
        TXUNRIE { 4 1 RRRegField WWRegField }
        RIE { 5 1 RRRegField WWRegField }
        TIE { 6 1 RRRegField WWRegField }
        TCIE { 7 1 RRRegField WWRegField }
        SRIE { 8 1 RRRegField WWRegField }
    }

    /// Receive frame length register.
    RFL {
        0x18 0x20 0x0000_0000 RReg RoReg;
        /// Receive frame length.
        RFL { 0 5 RRRegField RoRRegField }
    }

    /// Transmit data register.
    TDR {
        0x1C 0x20 0x0000_0000 WReg WoReg;
        /// Transmit data.
        TD { 0 32 WWRegField WoWRegField }
    }

    /// Receive data register.
    RDR {
        0x20 0x20 0x0000_0000 RReg RoReg;
        /// Received data.
        RD { 0 32 RRRegField RoRRegField }
    }

    /// Option register.
    OR {
        0x24 0x20 0x0000_0000 RReg WReg;
        SWP_TBYP { 0 1 RRRegField WWRegField }
        SWP_CLASS { 1 1 RRRegField WWRegField }
    }
}
