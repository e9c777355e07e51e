crate::periph! {
    /// Quad-SPI interface.
    pub struct QuadspiPeriph;

    QUADSPI 0xA000_1000;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Enable.
        EN { 0 1 RRRegField WWRegField }
        /// Abort request.
        ABORT { 1 1 RRRegField WWRegField }
        DMAEN { 2 1 RRRegField WWRegField }
        /// Timeout counter enable.
        TCEN { 3 1 RRRegField WWRegField }
        /// Sample shift.
        SSHIFT { 4 1 RRRegField WWRegField }
        /// Dual-flash mode.
        DFM { 6 1 RRRegField WWRegField }
        /// Flash memory selection.
        FSEL { 7 1 RRRegField WWRegField }
        /// FIFO threshold level.
        FTHRES { 8 4 RRRegField WWRegField }
        TEIE { 16 1 RRRegField WWRegField }
        TCIE { 17 1 RRRegField WWRegField }
        FTIE { 18 1 RRRegField WWRegField }
        SMIE { 19 1 RRRegField WWRegField }
        TOIE { 20 1 RRRegField WWRegField }
        APMS { 22 1 RRRegField WWRegField }
        PMM { 23 1 RRRegField WWRegField }
        /// Clock prescaler.
        PRESCALER { 24 8 RRRegField WWRegField }
    }

    /// Device configuration register.
    DCR {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Mode 0 / mode 3.
        CKMODE { 0 1 RRRegField WWRegField }
        /// Chip select high time.
        CSHT { 8 3 RRRegField WWRegField }
        /// Flash memory size.
        FSIZE { 16 5 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x08 0x20 0x0000_0000 RReg RoReg;
        TEF { 0 1 RRRegField RoRRegField }
        TCF { 1 1 RRRegField RoRRegField }
        FTF { 2 1 RRRegField RoRRegField }
        SMF { 3 1 RRRegField RoRRegField }
        TOF { 4 1 RRRegField RoRRegField }
        BUSY { 5 1 RRRegField RoRRegField }
        FLEVEL { 8 5 RRRegField RoRRegField }
    }

    /// Flag clear register.
    FCR {
        0x0C 0x20 0x0000_0000 WReg WoReg;
        CTEF { 0 1 WWRegField WoWRegField }
        CTCF { 1 1 WWRegField WoWRegField }
        CSMF { 3 1 WWRegField WoWRegField }
        CTOF { 4 1 WWRegField WoWRegField }
    }

    /// Data length register.
    DLR {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// Data length.
        DL { 0 32 RRRegField WWRegField }
    }

    /// Communication configuration register.
    CCR {
        0x14 0x20 0x0000_0000 RReg WReg;
        /// Instruction.
        INSTRUCTION { 0 8 RRRegField WWRegField }
        /// Instruction mode.
        IMODE { 8 2 RRRegField WWRegField }
        /// Address mode.
        ADMODE { 10 2 RRRegField WWRegField }
        /// Address size.
        ADSIZE { 12 2 RRRegField WWRegField }
        ABMODE { 14 2 RRRegField WWRegField }
        ABSIZE { 16 2 RRRegField WWRegField }
        /// Number of dummy cycles.
        DCYC { 18 5 RRRegField WWRegField }
        /// Data mode.
        DMODE { 24 2 RRRegField WWRegField }
        /// Functional mode.
        FMODE { 26 2 RRRegField WWRegField }
        /// Send instruction only once mode.
        SIOO { 28 1 RRRegField WWRegField }
        DHHC { 30 1 RRRegField WWRegField }
        /// Double data rate mode.
        DDRM { 31 1 RRRegField WWRegField }
    }

    /// Address register.
    AR {
        0x18 0x20 0x0000_0000 RReg WReg;
        ADDRESS { 0 32 RRRegField WWRegField }
    }

    /// Alternate bytes register.
    ABR {
        0x1C 0x20 0x0000_0000 RReg WReg;
        ALTERNATE { 0 32 RRRegField WWRegField }
    }

    /// Data register.
    DR {
        0x20 0x20 0x0000_0000 RReg WReg;
        DATA { 0 32 RRRegField WWRegField }
    }

    /// Polling status mask register.
    PSMKR {
        0x24 0x20 0x0000_0000 RReg WReg;
        MASK { 0 32 RRRegField WWRegField }
    }

    /// Polling status match register.
    PSMAR {
        0x28 0x20 0x0000_0000 RReg WReg;
        MATCH { 0 32 RRRegField WWRegField }
    }

    /// Polling interval register.
    PIR {
        0x2C 0x20 0x0000_0000 RReg WReg;
        INTERVAL { 0 16 RRRegField WWRegField }
    }

    /// Low-power timeout register.
    LPTR {
        0x30 0x20 0x0000_0000 RReg WReg;
        TIMEOUT { 0 16 RRRegField WWRegField }
    }
}
