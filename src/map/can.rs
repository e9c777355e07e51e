//! bxCAN controllers.
//!
//! Filter banks are shared between CAN1 and CAN2 and are accessed through the
//! CAN1 instance.

crate::periph! {
    /// Controller area network.
    pub struct CanPeriph;

    CAN1 0x4000_6400;
    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    CAN2 0x4000_6800;

    /// Master control register.
    MCR {
        0x00 0x20 0x0001_0002 RReg WReg;
        /// Initialization request.
        INRQ { 0 1 RRRegField WWRegField }
        /// Sleep mode request.
        SLEEP { 1 1 RRRegField WWRegField }
        /// Transmit FIFO priority.
        TXFP { 2 1 RRRegField WWRegField }
        /// Receive FIFO locked mode.
        RFLM { 3 1 RRRegField WWRegField }
        /// No automatic retransmission.
        NART { 4 1 RRRegField WWRegField }
        /// Automatic wakeup mode.
        AWUM { 5 1 RRRegField WWRegField }
        /// Automatic bus-off management.
        ABOM { 6 1 RRRegField WWRegField }
        /// Time triggered communication mode.
        TTCM { 7 1 RRRegField WWRegField }
        /// Master reset.
        RESET { 15 1 RRRegField WWRegField }
        /// Debug freeze.
        DBF { 16 1 RRRegField WWRegField }
    }

    /// Master status register.
    MSR {
        0x04 0x20 0x0000_0C02 RReg WReg;
        /// Initialization acknowledge.
        INAK { 0 1 RRRegField RoRRegField }
        /// Sleep acknowledge.
        SLAK { 1 1 RRRegField RoRRegField }
        /// Error interrupt.
        ERRI { 2 1 RRRegField WWRegField }
        /// Wakeup interrupt.
        WKUI { 3 1 RRRegField WWRegField }
        SLAKI { 4 1 RRRegField WWRegField }
        /// Transmit mode.
        TXM { 8 1 RRRegField RoRRegField }
        /// Receive mode.
        RXM { 9 1 RRRegField RoRRegField }
        /// Last sample point.
        SAMP { 10 1 RRRegField RoRRegField }
        /// CAN RX signal.
        RX { 11 1 RRRegField RoRRegField }
    }

    /// Transmit status register.
    TSR {
        0x08 0x20 0x1C00_0000 RReg WReg;
        RQCP0 { 0 1 RRRegField WWRegField }
        TXOK0 { 1 1 RRRegField WWRegField }
        ALST0 { 2 1 RRRegField WWRegField }
        TERR0 { 3 1 RRRegField WWRegField }
        ABRQ0 { 7 1 RRRegField WWRegField }
        RQCP1 { 8 1 RRRegField WWRegField }
        TXOK1 { 9 1 RRRegField WWRegField }
        ALST1 { 10 1 RRRegField WWRegField }
        TERR1 { 11 1 RRRegField WWRegField }
        ABRQ1 { 15 1 RRRegField WWRegField }
        RQCP2 { 16 1 RRRegField WWRegField }
        TXOK2 { 17 1 RRRegField WWRegField }
        ALST2 { 18 1 RRRegField WWRegField }
        TERR2 { 19 1 RRRegField WWRegField }
        ABRQ2 { 23 1 RRRegField WWRegField }
        /// Mailbox code.
        CODE { 24 2 RRRegField RoRRegField }
        /// Transmit mailbox 0 empty.
        TME0 { 26 1 RRRegField RoRRegField }
        TME1 { 27 1 RRRegField RoRRegField }
        TME2 { 28 1 RRRegField RoRRegField }
        LOW0 { 29 1 RRRegField RoRRegField }
        LOW1 { 30 1 RRRegField RoRRegField }
        LOW2 { 31 1 RRRegField RoRRegField }
    }

    /// Receive FIFO 0 register.
    RF0R {
        0x0C 0x20 0x0000_0000 RReg WReg;
        /// FIFO message pending.
        FMP { 0 2 RRRegField RoRRegField }
        /// FIFO full.
        FULL { 3 1 RRRegField WWRegField }
        /// FIFO overrun.
        FOVR { 4 1 RRRegField WWRegField }
        /// Release FIFO output mailbox.
        RFOM { 5 1 RRRegField WWRegField }
    }

    /// Receive FIFO 1 register.
    RF1R {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// FIFO message pending.
        FMP { 0 2 RRRegField RoRRegField }
        /// FIFO full.
        FULL { 3 1 RRRegField WWRegField }
        /// FIFO overrun.
        FOVR { 4 1 RRRegField WWRegField }
        /// Release FIFO output mailbox.
        RFOM { 5 1 RRRegField WWRegField }
    }

    /// Interrupt enable register.
    IER {
        0x14 0x20 0x0000_0000 RReg WReg;
        TMEIE { 0 1 RRRegField WWRegField }
        FMPIE0 { 1 1 RRRegField WWRegField }
        FFIE0 { 2 1 RRRegField WWRegField }
        FOVIE0 { 3 1 RRRegField WWRegField }
        FMPIE1 { 4 1 RRRegField WWRegField }
        FFIE1 { 5 1 RRRegField WWRegField }
        FOVIE1 { 6 1 RRRegField WWRegField }
        EWGIE { 8 1 RRRegField WWRegField }
        EPVIE { 9 1 RRRegField WWRegField }
        BOFIE { 10 1 RRRegField WWRegField }
        LECIE { 11 1 RRRegField WWRegField }
        ERRIE { 15 1 RRRegField WWRegField }
        WKUIE { 16 1 RRRegField WWRegField }
        SLKIE { 17 1 RRRegField WWRegField }
    }

    /// Error status register.
    ESR {
        0x18 0x20 0x0000_0000 RReg WReg;
        /// Error warning flag.
        EWGF { 0 1 RRRegField RoRRegField }
        /// Error passive flag.
        EPVF { 1 1 RRRegField RoRRegField }
        /// Bus-off flag.
        BOFF { 2 1 RRRegField RoRRegField }
        /// Last error code.
        LEC { 4 3 RRRegField WWRegField }
        /// Least significant byte of the 9-bit transmit error counter.
        TEC { 16 8 RRRegField RoRRegField }
        /// Receive error counter.
        REC { 24 8 RRRegField RoRRegField }
    }

    /// Bit timing register.
    BTR {
        0x1C 0x20 0x0123_0000 RReg WReg;
        /// Baud rate prescaler.
        BRP { 0 10 RRRegField WWRegField }
        /// Time segment 1.
        TS1 { 16 4 RRRegField WWRegField }
        /// Time segment 2.
        TS2 { 20 3 RRRegField WWRegField }
        /// Resynchronization jump width.
        SJW { 24 2 RRRegField WWRegField }
        /// Loop back mode.
        LBKM { 30 1 RRRegField WWRegField }
        /// Silent mode.
        SILM { 31 1 RRRegField WWRegField }
    }

    /// TX mailbox 0 identifier register.
    TI0R {
        0x180 0x20 0x0000_0000 RReg WReg;
        /// Transmit mailbox request.
        TXRQ { 0 1 RRRegField WWRegField }
        /// Remote transmission request.
        RTR { 1 1 RRRegField WWRegField }
        /// Identifier extension.
        IDE { 2 1 RRRegField WWRegField }
        /// Extended identifier.
        EXID { 3 18 RRRegField WWRegField }
        /// Standard identifier or extended identifier.
        STID { 21 11 RRRegField WWRegField }
    }

    /// TX mailbox 0 data length control and time stamp register.
    TDT0R {
        0x184 0x20 0x0000_0000 RReg WReg;
        /// Data length code.
        DLC { 0 4 RRRegField WWRegField }
        /// Transmit global time.
        TGT { 8 1 RRRegField WWRegField }
        /// Message time stamp.
        TIME { 16 16 RRRegField WWRegField }
    }

    /// TX mailbox 0 data low register.
    TDL0R {
        0x188 0x20 0x0000_0000 RReg WReg;
        DATA0 { 0 8 RRRegField WWRegField }
        DATA1 { 8 8 RRRegField WWRegField }
        DATA2 { 16 8 RRRegField WWRegField }
        DATA3 { 24 8 RRRegField WWRegField }
    }

    /// TX mailbox 0 data high register.
    TDH0R {
        0x18C 0x20 0x0000_0000 RReg WReg;
        DATA4 { 0 8 RRRegField WWRegField }
        DATA5 { 8 8 RRRegField WWRegField }
        DATA6 { 16 8 RRRegField WWRegField }
        DATA7 { 24 8 RRRegField WWRegField }
    }

    /// TX mailbox 1 identifier register.
    TI1R {
        0x190 0x20 0x0000_0000 RReg WReg;
        /// Transmit mailbox request.
        TXRQ { 0 1 RRRegField WWRegField }
        /// Remote transmission request.
        RTR { 1 1 RRRegField WWRegField }
        /// Identifier extension.
        IDE { 2 1 RRRegField WWRegField }
        /// Extended identifier.
        EXID { 3 18 RRRegField WWRegField }
        /// Standard identifier or extended identifier.
        STID { 21 11 RRRegField WWRegField }
    }

    /// TX mailbox 1 data length control and time stamp register.
    TDT1R {
        0x194 0x20 0x0000_0000 RReg WReg;
        /// Data length code.
        DLC { 0 4 RRRegField WWRegField }
        /// Transmit global time.
        TGT { 8 1 RRRegField WWRegField }
        /// Message time stamp.
        TIME { 16 16 RRRegField WWRegField }
    }

    /// TX mailbox 1 data low register.
    TDL1R {
        0x198 0x20 0x0000_0000 RReg WReg;
        DATA0 { 0 8 RRRegField WWRegField }
        DATA1 { 8 8 RRRegField WWRegField }
        DATA2 { 16 8 RRRegField WWRegField }
        DATA3 { 24 8 RRRegField WWRegField }
    }

    /// TX mailbox 1 data high register.
    TDH1R {
        0x19C 0x20 0x0000_0000 RReg WReg;
        DATA4 { 0 8 RRRegField WWRegField }
        DATA5 { 8 8 RRRegField WWRegField }
        DATA6 { 16 8 RRRegField WWRegField }
        DATA7 { 24 8 RRRegField WWRegField }
    }

    /// TX mailbox 2 identifier register.
    TI2R {
        0x1A0 0x20 0x0000_0000 RReg WReg;
        /// Transmit mailbox request.
        TXRQ { 0 1 RRRegField WWRegField }
        /// Remote transmission request.
        RTR { 1 1 RRRegField WWRegField }
        /// Identifier extension.
        IDE { 2 1 RRRegField WWRegField }
        /// Extended identifier.
        EXID { 3 18 RRRegField WWRegField }
        /// Standard identifier or extended identifier.
        STID { 21 11 RRRegField WWRegField }
    }

    /// TX mailbox 2 data length control and time stamp register.
    TDT2R {
        0x1A4 0x20 0x0000_0000 RReg WReg;
        /// Data length code.
        DLC { 0 4 RRRegField WWRegField }
        /// Transmit global time.
        TGT { 8 1 RRRegField WWRegField }
        /// Message time stamp.
        TIME { 16 16 RRRegField WWRegField }
    }

    /// TX mailbox 2 data low register.
    TDL2R {
        0x1A8 0x20 0x0000_0000 RReg WReg;
        DATA0 { 0 8 RRRegField WWRegField }
        DATA1 { 8 8 RRRegField WWRegField }
        DATA2 { 16 8 RRRegField WWRegField }
        DATA3 { 24 8 RRRegField WWRegField }
    }

    /// TX mailbox 2 data high register.
    TDH2R {
        0x1AC 0x20 0x0000_0000 RReg WReg;
        DATA4 { 0 8 RRRegField WWRegField }
        DATA5 { 8 8 RRRegField WWRegField }
        DATA6 { 16 8 RRRegField WWRegField }
        DATA7 { 24 8 RRRegField WWRegField }
    }

    /// RX FIFO 0 mailbox identifier register.
    RI0R {
        0x1B0 0x20 0x0000_0000 RReg RoReg;
        RTR { 1 1 RRRegField RoRRegField }
        IDE { 2 1 RRRegField RoRRegField }
        EXID { 3 18 RRRegField RoRRegField }
        STID { 21 11 RRRegField RoRRegField }
    }

    /// RX FIFO 0 mailbox data length control and time stamp register.
    RDT0R {
        0x1B4 0x20 0x0000_0000 RReg RoReg;
        DLC { 0 4 RRRegField RoRRegField }
        /// Filter match index.
        FMI { 8 8 RRRegField RoRRegField }
        TIME { 16 16 RRRegField RoRRegField }
    }

    /// RX FIFO 0 mailbox data low register.
    RDL0R {
        0x1B8 0x20 0x0000_0000 RReg RoReg;
        DATA0 { 0 8 RRRegField RoRRegField }
        DATA1 { 8 8 RRRegField RoRRegField }
        DATA2 { 16 8 RRRegField RoRRegField }
        DATA3 { 24 8 RRRegField RoRRegField }
    }

    /// RX FIFO 0 mailbox data high register.
    RDH0R {
        0x1BC 0x20 0x0000_0000 RReg RoReg;
        DATA4 { 0 8 RRRegField RoRRegField }
        DATA5 { 8 8 RRRegField RoRRegField }
        DATA6 { 16 8 RRRegField RoRRegField }
        DATA7 { 24 8 RRRegField RoRRegField }
    }

    /// RX FIFO 1 mailbox identifier register.
    RI1R {
        0x1C0 0x20 0x0000_0000 RReg RoReg;
        RTR { 1 1 RRRegField RoRRegField }
        IDE { 2 1 RRRegField RoRRegField }
        EXID { 3 18 RRRegField RoRRegField }
        STID { 21 11 RRRegField RoRRegField }
    }

    /// RX FIFO 1 mailbox data length control and time stamp register.
    RDT1R {
        0x1C4 0x20 0x0000_0000 RReg RoReg;
        DLC { 0 4 RRRegField RoRRegField }
        /// Filter match index.
        FMI { 8 8 RRRegField RoRRegField }
        TIME { 16 16 RRRegField RoRRegField }
    }

    /// RX FIFO 1 mailbox data low register.
    RDL1R {
        0x1C8 0x20 0x0000_0000 RReg RoReg;
        DATA0 { 0 8 RRRegField RoRRegField }
        DATA1 { 8 8 RRRegField RoRRegField }
        DATA2 { 16 8 RRRegField RoRRegField }
        DATA3 { 24 8 RRRegField RoRRegField }
    }

    /// RX FIFO 1 mailbox data high register.
    RDH1R {
        0x1CC 0x20 0x0000_0000 RReg RoReg;
        DATA4 { 0 8 RRRegField RoRRegField }
        DATA5 { 8 8 RRRegField RoRRegField }
        DATA6 { 16 8 RRRegField RoRRegField }
        DATA7 { 24 8 RRRegField RoRRegField }
    }

    /// Filter master register.
    FMR {
        0x200 0x20 0x2A1C_0E01 RReg WReg;
        /// Filter initialization mode.
        FINIT { 0 1 RRRegField WWRegField }
        /// CAN2 start bank.
        CAN2SB { 8 6 RRRegField WWRegField }
    }

    /// Filter mode register.
    FM1R {
        0x204 0x20 0x0000_0000 RReg WReg;
        /// Filter mode.
        FBM0 { 0 1 RRRegField WWRegField }
        FBM1 { 1 1 RRRegField WWRegField }
        FBM2 { 2 1 RRRegField WWRegField }
        FBM3 { 3 1 RRRegField WWRegField }
        FBM4 { 4 1 RRRegField WWRegField }
        FBM5 { 5 1 RRRegField WWRegField }
        FBM6 { 6 1 RRRegField WWRegField }
        FBM7 { 7 1 RRRegField WWRegField }
        FBM8 { 8 1 RRRegField WWRegField }
        FBM9 { 9 1 RRRegField WWRegField }
        FBM10 { 10 1 RRRegField WWRegField }
        FBM11 { 11 1 RRRegField WWRegField }
        FBM12 { 12 1 RRRegField WWRegField }
        FBM13 { 13 1 RRRegField WWRegField }
        FBM14 { 14 1 RRRegField WWRegField }
        FBM15 { 15 1 RRRegField WWRegField }
        FBM16 { 16 1 RRRegField WWRegField }
        FBM17 { 17 1 RRRegField WWRegField }
        FBM18 { 18 1 RRRegField WWRegField }
        FBM19 { 19 1 RRRegField WWRegField }
        FBM20 { 20 1 RRRegField WWRegField }
        FBM21 { 21 1 RRRegField WWRegField }
        FBM22 { 22 1 RRRegField WWRegField }
        FBM23 { 23 1 RRRegField WWRegField }
        FBM24 { 24 1 RRRegField WWRegField }
        FBM25 { 25 1 RRRegField WWRegField }
        FBM26 { 26 1 RRRegField WWRegField }
        FBM27 { 27 1 RRRegField WWRegField }
    }

    /// Filter scale register.
    FS1R {
        0x20C 0x20 0x0000_0000 RReg WReg;
        /// Filter scale configuration.
        FSC0 { 0 1 RRRegField WWRegField }
        FSC1 { 1 1 RRRegField WWRegField }
        FSC2 { 2 1 RRRegField WWRegField }
        FSC3 { 3 1 RRRegField WWRegField }
        FSC4 { 4 1 RRRegField WWRegField }
        FSC5 { 5 1 RRRegField WWRegField }
        FSC6 { 6 1 RRRegField WWRegField }
        FSC7 { 7 1 RRRegField WWRegField }
        FSC8 { 8 1 RRRegField WWRegField }
        FSC9 { 9 1 RRRegField WWRegField }
        FSC10 { 10 1 RRRegField WWRegField }
        FSC11 { 11 1 RRRegField WWRegField }
        FSC12 { 12 1 RRRegField WWRegField }
        FSC13 { 13 1 RRRegField WWRegField }
        FSC14 { 14 1 RRRegField WWRegField }
        FSC15 { 15 1 RRRegField WWRegField }
        FSC16 { 16 1 RRRegField WWRegField }
        FSC17 { 17 1 RRRegField WWRegField }
        FSC18 { 18 1 RRRegField WWRegField }
        FSC19 { 19 1 RRRegField WWRegField }
        FSC20 { 20 1 RRRegField WWRegField }
        FSC21 { 21 1 RRRegField WWRegField }
        FSC22 { 22 1 RRRegField WWRegField }
        FSC23 { 23 1 RRRegField WWRegField }
        FSC24 { 24 1 RRRegField WWRegField }
        FSC25 { 25 1 RRRegField WWRegField }
        FSC26 { 26 1 RRRegField WWRegField }
        FSC27 { 27 1 RRRegField WWRegField }
    }

    /// Filter FIFO assignment register.
    FFA1R {
        0x214 0x20 0x0000_0000 RReg WReg;
        /// Filter FIFO assignment for filter x.
        FFA0 { 0 1 RRRegField WWRegField }
        FFA1 { 1 1 RRRegField WWRegField }
        FFA2 { 2 1 RRRegField WWRegField }
        FFA3 { 3 1 RRRegField WWRegField }
        FFA4 { 4 1 RRRegField WWRegField }
        FFA5 { 5 1 RRRegField WWRegField }
        FFA6 { 6 1 RRRegField WWRegField }
        FFA7 { 7 1 RRRegField WWRegField }
        FFA8 { 8 1 RRRegField WWRegField }
        FFA9 { 9 1 RRRegField WWRegField }
        FFA10 { 10 1 RRRegField WWRegField }
        FFA11 { 11 1 RRRegField WWRegField }
        FFA12 { 12 1 RRRegField WWRegField }
        FFA13 { 13 1 RRRegField WWRegField }
        FFA14 { 14 1 RRRegField WWRegField }
        FFA15 { 15 1 RRRegField WWRegField }
        FFA16 { 16 1 RRRegField WWRegField }
        FFA17 { 17 1 RRRegField WWRegField }
        FFA18 { 18 1 RRRegField WWRegField }
        FFA19 { 19 1 RRRegField WWRegField }
        FFA20 { 20 1 RRRegField WWRegField }
        FFA21 { 21 1 RRRegField WWRegField }
        FFA22 { 22 1 RRRegField WWRegField }
        FFA23 { 23 1 RRRegField WWRegField }
        FFA24 { 24 1 RRRegField WWRegField }
        FFA25 { 25 1 RRRegField WWRegField }
        FFA26 { 26 1 RRRegField WWRegField }
        FFA27 { 27 1 RRRegField WWRegField }
    }

    /// Filter activation register.
    FA1R {
        0x21C 0x20 0x0000_0000 RReg WReg;
        /// Filter active.
        FACT0 { 0 1 RRRegField WWRegField }
        FACT1 { 1 1 RRRegField WWRegField }
        FACT2 { 2 1 RRRegField WWRegField }
        FACT3 { 3 1 RRRegField WWRegField }
        FACT4 { 4 1 RRRegField WWRegField }
        FACT5 { 5 1 RRRegField WWRegField }
        FACT6 { 6 1 RRRegField WWRegField }
        FACT7 { 7 1 RRRegField WWRegField }
        FACT8 { 8 1 RRRegField WWRegField }
        FACT9 { 9 1 RRRegField WWRegField }
        FACT10 { 10 1 RRRegField WWRegField }
        FACT11 { 11 1 RRRegField WWRegField }
        FACT12 { 12 1 RRRegField WWRegField }
        FACT13 { 13 1 RRRegField WWRegField }
        FACT14 { 14 1 RRRegField WWRegField }
        FACT15 { 15 1 RRRegField WWRegField }
        FACT16 { 16 1 RRRegField WWRegField }
        FACT17 { 17 1 RRRegField WWRegField }
        FACT18 { 18 1 RRRegField WWRegField }
        FACT19 { 19 1 RRRegField WWRegField }
        FACT20 { 20 1 RRRegField WWRegField }
        FACT21 { 21 1 RRRegField WWRegField }
        FACT22 { 22 1 RRRegField WWRegField }
        FACT23 { 23 1 RRRegField WWRegField }
        FACT24 { 24 1 RRRegField WWRegField }
        FACT25 { 25 1 RRRegField WWRegField }
        FACT26 { 26 1 RRRegField WWRegField }
        FACT27 { 27 1 RRRegField WWRegField }
    }

    /// Filter bank 0 register 1.
    F0R1 {
        0x240 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 0 register 2.
    F0R2 {
        0x244 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 1 register 1.
    F1R1 {
        0x248 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 1 register 2.
    F1R2 {
        0x24C 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 2 register 1.
    F2R1 {
        0x250 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 2 register 2.
    F2R2 {
        0x254 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 3 register 1.
    F3R1 {
        0x258 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 3 register 2.
    F3R2 {
        0x25C 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 4 register 1.
    F4R1 {
        0x260 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 4 register 2.
    F4R2 {
        0x264 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 5 register 1.
    F5R1 {
        0x268 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 5 register 2.
    F5R2 {
        0x26C 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 6 register 1.
    F6R1 {
        0x270 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 6 register 2.
    F6R2 {
        0x274 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 7 register 1.
    F7R1 {
        0x278 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 7 register 2.
    F7R2 {
        0x27C 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 8 register 1.
    F8R1 {
        0x280 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 8 register 2.
    F8R2 {
        0x284 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 9 register 1.
    F9R1 {
        0x288 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 9 register 2.
    F9R2 {
        0x28C 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 10 register 1.
    F10R1 {
        0x290 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 10 register 2.
    F10R2 {
        0x294 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 11 register 1.
    F11R1 {
        0x298 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 11 register 2.
    F11R2 {
        0x29C 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 12 register 1.
    F12R1 {
        0x2A0 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 12 register 2.
    F12R2 {
        0x2A4 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 13 register 1.
    F13R1 {
        0x2A8 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 13 register 2.
    F13R2 {
        0x2AC 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 14 register 1.
    F14R1 {
        0x2B0 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 14 register 2.
    F14R2 {
        0x2B4 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 15 register 1.
    F15R1 {
        0x2B8 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 15 register 2.
    F15R2 {
        0x2BC 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 16 register 1.
    F16R1 {
        0x2C0 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 16 register 2.
    F16R2 {
        0x2C4 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 17 register 1.
    F17R1 {
        0x2C8 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 17 register 2.
    F17R2 {
        0x2CC 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 18 register 1.
    F18R1 {
        0x2D0 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 18 register 2.
    F18R2 {
        0x2D4 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 19 register 1.
    F19R1 {
        0x2D8 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 19 register 2.
    F19R2 {
        0x2DC 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 20 register 1.
    F20R1 {
        0x2E0 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 20 register 2.
    F20R2 {
        0x2E4 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 21 register 1.
    F21R1 {
        0x2E8 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 21 register 2.
    F21R2 {
        0x2EC 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 22 register 1.
    F22R1 {
        0x2F0 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 22 register 2.
    F22R2 {
        0x2F4 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 23 register 1.
    F23R1 {
        0x2F8 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 23 register 2.
    F23R2 {
        0x2FC 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 24 register 1.
    F24R1 {
        0x300 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 24 register 2.
    F24R2 {
        0x304 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 25 register 1.
    F25R1 {
        0x308 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 25 register 2.
    F25R2 {
        0x30C 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 26 register 1.
    F26R1 {
        0x310 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 26 register 2.
    F26R2 {
        0x314 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 27 register 1.
    F27R1 {
        0x318 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }

    /// Filter bank 27 register 2.
    F27R2 {
        0x31C 0x20 0x0000_0000 RReg WReg;
        /// Filter bits.
        FB { 0 32 RRRegField WWRegField }
    }
}
