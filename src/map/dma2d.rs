crate::periph! {
    /// Chrom-ART accelerator.
    pub struct Dma2dPeriph;

    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    DMA2D 0x4002_B000;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Start.
        START { 0 1 RRRegField WWRegField }
        /// Suspend.
        SUSP { 1 1 RRRegField WWRegField }
        /// Abort.
        ABORT { 2 1 RRRegField WWRegField }
        /// Line offset mode.
        LOM { 6 1 RRRegField WWRegField }
        TEIE { 8 1 RRRegField WWRegField }
        TCIE { 9 1 RRRegField WWRegField }
        TWIE { 10 1 RRRegField WWRegField }
        CAEIE { 11 1 RRRegField WWRegField }
        CTCIE { 12 1 RRRegField WWRegField }
        CEIE { 13 1 RRRegField WWRegField }
        /// DMA2D mode.
        MODE { 16 3 RRRegField WWRegField }
    }

    /// Interrupt status register.
    ISR {
        0x04 0x20 0x0000_0000 RReg RoReg;
        TEIF { 0 1 RRRegField RoRRegField }
        TCIF { 1 1 RRRegField RoRRegField }
        TWIF { 2 1 RRRegField RoRRegField }
        CAEIF { 3 1 RRRegField RoRRegField }
        CTCIF { 4 1 RRRegField RoRRegField }
        CEIF { 5 1 RRRegField RoRRegField }
    }

    /// Interrupt flag clear register.
    IFCR {
        0x08 0x20 0x0000_0000 RReg WReg;
        CTEIF { 0 1 RRRegField WWRegField }
        CTCIF { 1 1 RRRegField WWRegField }
        CTWIF { 2 1 RRRegField WWRegField }
        CAECIF { 3 1 RRRegField WWRegField }
        CCTCIF { 4 1 RRRegField WWRegField }
        CCEIF { 5 1 RRRegField WWRegField }
    }

    /// Foreground memory address register.
    FGMAR {
        0x0C 0x20 0x0000_0000 RReg WReg;
        MA { 0 32 RRRegField WWRegField }
    }

    /// Foreground offset register.
    FGOR {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// Line offset.
        LO { 0 16 RRRegField WWRegField }
    }

    /// Background memory address register.
    BGMAR {
        0x14 0x20 0x0000_0000 RReg WReg;
        MA { 0 32 RRRegField WWRegField }
    }

    /// Background offset register.
    BGOR {
        0x18 0x20 0x0000_0000 RReg WReg;
        /// Line offset.
        LO { 0 16 RRRegField WWRegField }
    }

    /// Foreground PFC control register.
    FGPFCCR {
        0x1C 0x20 0x0000_0000 RReg WReg;
        /// Color mode.
        CM { 0 4 RRRegField WWRegField }
        /// CLUT color mode.
        CCM { 4 1 RRRegField WWRegField }
        /// Start loading the CLUT.
        START { 5 1 RRRegField WWRegField }
        /// CLUT size.
        CS { 8 8 RRRegField WWRegField }
        /// Alpha mode.
        AM { 16 2 RRRegField WWRegField }
        /// Chroma sub-sampling.
        CSS { 18 2 RRRegField WWRegField }
        /// Alpha inverted.
        AI { 20 1 RRRegField WWRegField }
        /// Red blue swap.
        RBS { 21 1 RRRegField WWRegField }
        /// Alpha value.
        ALPHA { 24 8 RRRegField WWRegField }
    }

    /// Foreground color register.
    FGCOLR {
        0x20 0x20 0x0000_0000 RReg WReg;
        BLUE { 0 8 RRRegField WWRegField }
        GREEN { 8 8 RRRegField WWRegField }
        RED { 16 8 RRRegField WWRegField }
    }

    /// Background PFC control register.
    BGPFCCR {
        0x24 0x20 0x0000_0000 RReg WReg;
        CM { 0 4 RRRegField WWRegField }
        CCM { 4 1 RRRegField WWRegField }
        START { 5 1 RRRegField WWRegField }
        CS { 8 8 RRRegField WWRegField }
        AM { 16 2 RRRegField WWRegField }
        AI { 20 1 RRRegField WWRegField }
        RBS { 21 1 RRRegField WWRegField }
        ALPHA { 24 8 RRRegField WWRegField }
    }

    /// Background color register.
    BGCOLR {
        0x28 0x20 0x0000_0000 RReg WReg;
        BLUE { 0 8 RRRegField WWRegField }
        GREEN { 8 8 RRRegField WWRegField }
        RED { 16 8 RRRegField WWRegField }
    }

    /// Foreground CLUT memory address register.
    FGCMAR {
        0x2C 0x20 0x0000_0000 RReg WReg;
        MA { 0 32 RRRegField WWRegField }
    }

    /// Background CLUT memory address register.
    BGCMAR {
        0x30 0x20 0x0000_0000 RReg WReg;
        MA { 0 32 RRRegField WWRegField }
    }

    /// Output PFC control register.
    OPFCCR {
        0x34 0x20 0x0000_0000 RReg WReg;
        /// Color mode.
        CM { 0 3 RRRegField WWRegField }
        /// Swap bytes.
        SB { 8 1 RRRegField WWRegField }
        AI { 20 1 RRRegField WWRegField }
        RBS { 21 1 RRRegField WWRegField }
    }

    /// Output color register.
    OCOLR {
        0x38 0x20 0x0000_0000 RReg WReg;
        BLUE { 0 8 RRRegField WWRegField }
        GREEN { 8 8 RRRegField WWRegField }
        RED { 16 8 RRRegField WWRegField }
        ALPHA { 24 8 RRRegField WWRegField }
    }

    /// Output memory address register.
    OMAR {
        0x3C 0x20 0x0000_0000 RReg WReg;
        MA { 0 32 RRRegField WWRegField }
    }

    /// Output offset register.
    OOR {
        0x40 0x20 0x0000_0000 RReg WReg;
        LO { 0 16 RRRegField WWRegField }
    }

    /// Number of line register.
    NLR {
        0x44 0x20 0x0000_0000 RReg WReg;
        /// Number of lines.
        NL { 0 16 RRRegField WWRegField }
        /// Pixel per lines.
        PL { 16 14 RRRegField WWRegField }
    }

    /// Line watermark register.
    LWR {
        0x48 0x20 0x0000_0000 RReg WReg;
        /// Line watermark.
        LW { 0 16 RRRegField WWRegField }
    }

    /// AHB master timer configuration register.
    AMTCR {
        0x4C 0x20 0x0000_0000 RReg WReg;
        /// Dead time enable.
        EN { 0 1 RRRegField WWRegField }
        /// Dead time.
        DT { 8 8 RRRegField WWRegField }
    }
}
