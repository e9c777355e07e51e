crate::periph! {
    /// Low-power universal asynchronous receiver transmitter.
    pub struct LpuartPeriph;

    LPUART1 0x4000_8000;

    /// Control register 1.
    CR1 {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// LPUART enable.
        UE { 0 1 RRRegField WWRegField }
        UESM { 1 1 RRRegField WWRegField }
        /// Receiver enable.
        RE { 2 1 RRRegField WWRegField }
        /// Transmitter enable.
        TE { 3 1 RRRegField WWRegField }
        IDLEIE { 4 1 RRRegField WWRegField }
        RXNEIE { 5 1 RRRegField WWRegField }
        TCIE { 6 1 RRRegField WWRegField }
        TXEIE { 7 1 RRRegField WWRegField }
        PEIE { 8 1 RRRegField WWRegField }
        PS { 9 1 RRRegField WWRegField }
        PCE { 10 1 RRRegField WWRegField }
        WAKE { 11 1 RRRegField WWRegField }
        M0 { 12 1 RRRegField WWRegField }
        MME { 13 1 RRRegField WWRegField }
        CMIE { 14 1 RRRegField WWRegField }
        DEDT { 16 5 RRRegField WWRegField }
        DEAT { 21 5 RRRegField WWRegField }
        M1 { 28 1 RRRegField WWRegField }
    }

    /// Control register 2.
    CR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        ADDM7 { 4 1 RRRegField WWRegField }
        /// Stop bits.
        STOP { 12 2 RRRegField WWRegField }
        SWAP { 15 1 RRRegField WWRegField }
        RXINV { 16 1 RRRegField WWRegField }
        TXINV { 17 1 RRRegField WWRegField }
        DATAINV { 18 1 RRRegField WWRegField }
        MSBFIRST { 19 1 RRRegField WWRegField }
        ADD { 24 8 RRRegField WWRegField }
    }

    /// Control register 3.
    CR3 {
        0x08 0x20 0x0000_0000 RReg WReg;
        EIE { 0 1 RRRegField WWRegField }
        HDSEL { 3 1 RRRegField WWRegField }
        DMAR { 6 1 RRRegField WWRegField }
        DMAT { 7 1 RRRegField WWRegField }
        RTSE { 8 1 RRRegField WWRegField }
        CTSE { 9 1 RRRegField WWRegField }
        CTSIE { 10 1 RRRegField WWRegField }
        OVRDIS { 12 1 RRRegField WWRegField }
        DDRE { 13 1 RRRegField WWRegField }
        DEM { 14 1 RRRegField WWRegField }
        DEP { 15 1 RRRegField WWRegField }
        WUS { 20 2 RRRegField WWRegField }
        WUFIE { 22 1 RRRegField WWRegField }
        UCESM { 23 1 RRRegField WWRegField }
    }

    /// Baud rate register.
    BRR {
        0x0C 0x20 0x0000_0000 RReg WReg;
        BRR { 0 20 RRRegField WWRegField }
    }

    /// Request register.
    RQR {
        0x18 0x20 0x0000_0000 WReg WoReg;
        SBKRQ { 1 1 WWRegField WoWRegField }
        MMRQ { 2 1 WWRegField WoWRegField }
        RXFRQ { 3 1 WWRegField WoWRegField }
    }

    /// Interrupt and status register.
    ISR {
        0x1C 0x20 0x0000_00C0 RReg RoReg;
        PE { 0 1 RRRegField RoRRegField }
        FE { 1 1 RRRegField RoRRegField }
        NF { 2 1 RRRegField RoRRegField }
        ORE { 3 1 RRRegField RoRRegField }
        IDLE { 4 1 RRRegField RoRRegField }
        RXNE { 5 1 RRRegField RoRRegField }
        TC { 6 1 RRRegField RoRRegField }
        TXE { 7 1 RRRegField RoRRegField }
        CTSIF { 9 1 RRRegField RoRRegField }
        CTS { 10 1 RRRegField RoRRegField }
        BUSY { 16 1 RRRegField RoRRegField }
        CMF { 17 1 RRRegField RoRRegField }
        SBKF { 18 1 RRRegField RoRRegField }
        RWU { 19 1 RRRegField RoRRegField }
        WUF { 20 1 RRRegField RoRRegField }
        TEACK { 21 1 RRRegField RoRRegField }
        REACK { 22 1 RRRegField RoRRegField }
    }

    /// Interrupt flag clear register.
    ICR {
        0x20 0x20 0x0000_0000 WReg WoReg;
        PECF { 0 1 WWRegField WoWRegField }
        FECF { 1 1 WWRegField WoWRegField }
        NCF { 2 1 WWRegField WoWRegField }
        ORECF { 3 1 WWRegField WoWRegField }
        IDLECF { 4 1 WWRegField WoWRegField }
        TCCF { 6 1 WWRegField WoWRegField }
        CTSCF { 9 1 WWRegField WoWRegField }
        CMCF { 17 1 WWRegField WoWRegField }
        WUCF { 20 1 WWRegField WoWRegField }
    }

    /// Receive data register.
    RDR {
        0x24 0x20 0x0000_0000 RReg RoReg;
        RDR { 0 9 RRRegField RoRRegField }
    }

    /// Transmit data register.
    TDR {
        0x28 0x20 0x0000_0000 RReg WReg;
        TDR { 0 9 RRRegField WWRegField }
    }
}
