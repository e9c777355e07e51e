//! Serial audio interface sub-blocks A and B.

crate::periph! {
    /// Serial audio interface sub-block.
    pub struct SaiBlockPeriph;

    SAI1_A 0x4001_5404;
    SAI1_B 0x4001_5424;
    SAI2_A 0x4001_5804;
    SAI2_B 0x4001_5824;

    /// Configuration register 1.
    CR1 {
        0x00 0x20 0x0000_0040 RReg WReg;
        /// Audio block mode.
        MODE { 0 2 RRRegField WWRegField }
        /// Protocol configuration.
        PRTCFG { 2 2 RRRegField WWRegField }
        /// Data size.
        DS { 5 3 RRRegField WWRegField }
        LSBFIRST { 8 1 RRRegField WWRegField }
        /// Clock strobing edge.
        CKSTR { 9 1 RRRegField WWRegField }
        /// Synchronization enable.
        SYNCEN { 10 2 RRRegField WWRegField }
        /// Mono mode.
        MONO { 12 1 RRRegField WWRegField }
        /// Output drive.
        OUTDRIV { 13 1 RRRegField WWRegField }
        /// Audio block enable.
        SAIEN { 16 1 RRRegField WWRegField }
        DMAEN { 17 1 RRRegField WWRegField }
        /// No divider.
        NODIV { 19 1 RRRegField WWRegField }
        /// Master clock divider.
        MCKDIV { 20 4 RRRegField WWRegField }
    }

    /// Configuration register 2.
    CR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// FIFO threshold.
        FTH { 0 3 RRRegField WWRegField }
        /// FIFO flush.
        FFLUSH { 3 1 RRRegField WWRegField }
        TRIS { 4 1 RRRegField WWRegField }
        /// Mute.
        MUTE { 5 1 RRRegField WWRegField }
        MUTEVAL { 6 1 RRRegField WWRegField }
        MUTECNT { 7 6 RRRegField WWRegField }
        CPL { 13 1 RRRegField WWRegField }
        /// Companding mode.
        COMP { 14 2 RRRegField WWRegField }
    }

    /// Frame configuration register.
    FRCR {
        0x08 0x20 0x0000_0007 RReg WReg;
        /// Frame length.
        FRL { 0 8 RRRegField WWRegField }
        /// Frame synchronization active level length.
        FSALL { 8 7 RRRegField WWRegField }
        /// Frame synchronization definition.
        FSDEF { 16 1 RRRegField WWRegField }
        /// Frame synchronization polarity.
        FSPOL { 17 1 RRRegField WWRegField }
        /// Frame synchronization offset.
        FSOFF { 18 1 RRRegField WWRegField }
    }

    /// Slot register.
    SLOTR {
        0x0C 0x20 0x0000_0000 RReg WReg;
        /// First bit offset.
        FBOFF { 0 5 RRRegField WWRegField }
        /// Slot size.
        SLOTSZ { 6 2 RRRegField WWRegField }
        /// Number of slots in an audio frame.
        NBSLOT { 8 4 RRRegField WWRegField }
        /// Slot enable.
        SLOTEN { 16 16 RRRegField WWRegField }
    }

    /// Interrupt mask register.
    IM {
        0x10 0x20 0x0000_0000 RReg WReg;
        OVRUDRIE { 0 1 RRRegField WWRegField }
        MUTEDETIE { 1 1 RRRegField WWRegField }
        WCKCFGIE { 2 1 RRRegField WWRegField }
        FREQIE { 3 1 RRRegField WWRegField }
        CNRDYIE { 4 1 RRRegField WWRegField }
        AFSDETIE { 5 1 RRRegField WWRegField }
        LFSDETIE { 6 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x14 0x20 0x0000_0008 RReg RoReg;
        OVRUDR { 0 1 RRRegField RoRRegField }
        MUTEDET { 1 1 RRRegField RoRRegField }
        WCKCFG { 2 1 RRRegField RoRRegField }
        FREQ { 3 1 RRRegField RoRRegField }
        CNRDY { 4 1 RRRegField RoRRegField }
        AFSDET { 5 1 RRRegField RoRRegField }
        LFSDET { 6 1 RRRegField RoRRegField }
        FLVL { 16 3 RRRegField RoRRegField }
    }

    /// Clear flag register.
    CLRFR {
        0x18 0x20 0x0000_0000 WReg WoReg;
        COVRUDR { 0 1 WWRegField WoWRegField }
        CMUTEDET { 1 1 WWRegField WoWRegField }
        CWCKCFG { 2 1 WWRegField WoWRegField }
        CCNRDY { 4 1 WWRegField WoWRegField }
        CAFSDET { 5 1 WWRegField WoWRegField }
        CLFSDET { 6 1 WWRegField WoWRegField }
    }

    /// Data register.
    DR {
        0x1C 0x20 0x0000_0000 RReg WReg;
        DATA { 0 32 RRRegField WWRegField }
    }
}
