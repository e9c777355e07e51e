//! Universal synchronous asynchronous receivers transmitters.

crate::periph! {
    /// Universal synchronous asynchronous receiver transmitter.
    pub struct UsartPeriph;

    USART1 0x4001_3800;
    USART2 0x4000_4400;
    USART3 0x4000_4800;
    UART4 0x4000_4C00;
    UART5 0x4000_5000;

    /// Control register 1.
    CR1 {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// USART enable.
        UE { 0 1 RRRegField WWRegField }
        /// USART enable in Stop mode.
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
        /// Parity selection.
        PS { 9 1 RRRegField WWRegField }
        /// Parity control enable.
        PCE { 10 1 RRRegField WWRegField }
        WAKE { 11 1 RRRegField WWRegField }
        /// Word length, bit 0.
        M0 { 12 1 RRRegField WWRegField }
        MME { 13 1 RRRegField WWRegField }
        CMIE { 14 1 RRRegField WWRegField }
        /// Oversampling mode.
        OVER8 { 15 1 RRRegField WWRegField }
        DEDT { 16 5 RRRegField WWRegField }
        DEAT { 21 5 RRRegField WWRegField }
        RTOIE { 26 1 RRRegField WWRegField }
        EOBIE { 27 1 RRRegField WWRegField }
        /// Word length, bit 1.
        M1 { 28 1 RRRegField WWRegField }
    }

    /// Control register 2.
    CR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        ADDM7 { 4 1 RRRegField WWRegField }
        LBDL { 5 1 RRRegField WWRegField }
        LBDIE { 6 1 RRRegField WWRegField }
        LBCL { 8 1 RRRegField WWRegField }
        CPHA { 9 1 RRRegField WWRegField }
        CPOL { 10 1 RRRegField WWRegField }
        CLKEN { 11 1 RRRegField WWRegField }
        /// Stop bits.
        STOP { 12 2 RRRegField WWRegField }
        LINEN { 14 1 RRRegField WWRegField }
        /// Swap TX/RX pins.
        SWAP { 15 1 RRRegField WWRegField }
        RXINV { 16 1 RRRegField WWRegField }
        TXINV { 17 1 RRRegField WWRegField }
        DATAINV { 18 1 RRRegField WWRegField }
        MSBFIRST { 19 1 RRRegField WWRegField }
        ABREN { 20 1 RRRegField WWRegField }
        ABRMOD { 21 2 RRRegField WWRegField }
        RTOEN { 23 1 RRRegField WWRegField }
        /// Address of the USART node.
        ADD { 24 8 RRRegField WWRegField }
    }

    /// Control register 3.
    CR3 {
        0x08 0x20 0x0000_0000 RReg WReg;
        EIE { 0 1 RRRegField WWRegField }
        IREN { 1 1 RRRegField WWRegField }
        IRLP { 2 1 RRRegField WWRegField }
        /// Half-duplex selection.
        HDSEL { 3 1 RRRegField WWRegField }
        NACK { 4 1 RRRegField WWRegField }
        SCEN { 5 1 RRRegField WWRegField }
        /// DMA enable receiver.
        DMAR { 6 1 RRRegField WWRegField }
        /// DMA enable transmitter.
        DMAT { 7 1 RRRegField WWRegField }
        RTSE { 8 1 RRRegField WWRegField }
        CTSE { 9 1 RRRegField WWRegField }
        CTSIE { 10 1 RRRegField WWRegField }
        ONEBIT { 11 1 RRRegField WWRegField }
        OVRDIS { 12 1 RRRegField WWRegField }
        DDRE { 13 1 RRRegField WWRegField }
        DEM { 14 1 RRRegField WWRegField }
        DEP { 15 1 RRRegField WWRegField }
        SCARCNT { 17 3 RRRegField WWRegField }
        WUS { 20 2 RRRegField WWRegField }
        WUFIE { 22 1 RRRegField WWRegField }
        UCESM { 23 1 RRRegField WWRegField }
        TCBGTIE { 24 1 RRRegField WWRegField }
    }

    /// Baud rate register.
    BRR {
        0x0C 0x20 0x0000_0000 RReg WReg;
        BRR { 0 16 RRRegField WWRegField }
    }

    /// Guard time and prescaler register.
    GTPR {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// Prescaler value.
        PSC { 0 8 RRRegField WWRegField }
        /// Guard time value.
        GT { 8 8 RRRegField WWRegField }
    }

    /// Receiver timeout register.
    RTOR {
        0x14 0x20 0x0000_0000 RReg WReg;
        /// Receiver timeout value.
        RTO { 0 24 RRRegField WWRegField }
        /// Block length.
        BLEN { 24 8 RRRegField WWRegField }
    }

    /// Request register.
    RQR {
        0x18 0x20 0x0000_0000 WReg WoReg;
        ABRRQ { 0 1 WWRegField WoWRegField }
        SBKRQ { 1 1 WWRegField WoWRegField }
        MMRQ { 2 1 WWRegField WoWRegField }
        RXFRQ { 3 1 WWRegField WoWRegField }
        TXFRQ { 4 1 WWRegField WoWRegField }
    }

    /// Interrupt and status register.
    ISR {
        0x1C 0x20 0x0000_00C0 RReg RoReg;
        /// Parity error.
        PE { 0 1 RRRegField RoRRegField }
        /// Framing error.
        FE { 1 1 RRRegField RoRRegField }
        /// Start bit noise detection flag.
        NF { 2 1 RRRegField RoRRegField }
        /// Overrun error.
        ORE { 3 1 RRRegField RoRRegField }
        /// Idle line detected.
        IDLE { 4 1 RRRegField RoRRegField }
        /// Read data register not empty.
        RXNE { 5 1 RRRegField RoRRegField }
        /// Transmission complete.
        TC { 6 1 RRRegField RoRRegField }
        /// Transmit data register empty.
        TXE { 7 1 RRRegField RoRRegField }
        LBDF { 8 1 RRRegField RoRRegField }
        CTSIF { 9 1 RRRegField RoRRegField }
        CTS { 10 1 RRRegField RoRRegField }
        RTOF { 11 1 RRRegField RoRRegField }
        EOBF { 12 1 RRRegField RoRRegField }
        ABRE { 14 1 RRRegField RoRRegField }
        ABRF { 15 1 RRRegField RoRRegField }
        BUSY { 16 1 RRRegField RoRRegField }
        CMF { 17 1 RRRegField RoRRegField }
        SBKF { 18 1 RRRegField RoRRegField }
        RWU { 19 1 RRRegField RoRRegField }
        WUF { 20 1 RRRegField RoRRegField }
        TEACK { 21 1 RRRegField RoRRegField }
        REACK { 22 1 RRRegField RoRRegField }
        TCBGT { 25 1 RRRegField RoRRegField }
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
        TCBGTCF { 7 1 WWRegField WoWRegField }
        LBDCF { 8 1 WWRegField WoWRegField }
        CTSCF { 9 1 WWRegField WoWRegField }
        RTOCF { 11 1 WWRegField WoWRegField }
        EOBCF { 12 1 WWRegField WoWRegField }
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
