crate::periph! {
    /// Hash processor.
    pub struct HashPeriph;

    #[cfg(feature = "stm32l4a6")]
    HASH 0x5006_0400;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Initialize message digest calculation.
        INIT { 2 1 RRRegField WWRegField }
        /// DMA enable.
        DMAE { 3 1 RRRegField WWRegField }
        /// Data type selection.
        DATATYPE { 4 2 RRRegField WWRegField }
        /// Mode selection.
        MODE { 6 1 RRRegField WWRegField }
        /// Algorithm selection, low bit.
        ALGO0 { 7 1 RRRegField WWRegField }
        /// Number of words already pushed.
        NBW { 8 4 RRRegField RoRRegField }
        /// DIN not empty.
        DINNE { 12 1 RRRegField RoRRegField }
        /// Multiple DMA transfers.
        MDMAT { 13 1 RRRegField WWRegField }
        /// Long key selection.
        LKEY { 16 1 RRRegField WWRegField }
        /// Algorithm selection, high bit.
        ALGO1 { 18 1 RRRegField WWRegField }
    }

    /// Data input register.
    DIN {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Data input.
        DATAIN { 0 32 RRRegField WWRegField }
    }

    /// Start register.
    STR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Number of valid bits in the last word.
        NBLW { 0 5 RRRegField WWRegField }
        /// Digest calculation.
        DCAL { 8 1 RRRegField WWRegField }
    }

    /// Digest register 0.
    HR0 {
        0x0C 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Digest register 1.
    HR1 {
        0x10 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Digest register 2.
    HR2 {
        0x14 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Digest register 3.
    HR3 {
        0x18 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Digest register 4.
    HR4 {
        0x1C 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Interrupt enable register.
    IMR {
        0x20 0x20 0x0000_0000 RReg WReg;
        /// Data input interrupt enable.
        DINIE { 0 1 RRRegField WWRegField }
        /// Digest calculation completion interrupt enable.
        DCIE { 1 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x24 0x20 0x0000_0001 RReg WReg;
        /// Data input interrupt status.
        DINIS { 0 1 RRRegField WWRegField }
        /// Digest calculation completion interrupt status.
        DCIS { 1 1 RRRegField WWRegField }
        /// DMA status.
        DMAS { 2 1 RRRegField RoRRegField }
        /// Busy bit.
        BUSY { 3 1 RRRegField RoRRegField }
    }

    /// Context swap register 0.
    CSR0 {
        0xF8 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 1.
    CSR1 {
        0xFC 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 2.
    CSR2 {
        0x100 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 3.
    CSR3 {
        0x104 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 4.
    CSR4 {
        0x108 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 5.
    CSR5 {
        0x10C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 6.
    CSR6 {
        0x110 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 7.
    CSR7 {
        0x114 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 8.
    CSR8 {
        0x118 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 9.
    CSR9 {
        0x11C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 10.
    CSR10 {
        0x120 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 11.
    CSR11 {
        0x124 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 12.
    CSR12 {
        0x128 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 13.
    CSR13 {
        0x12C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 14.
    CSR14 {
        0x130 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 15.
    CSR15 {
        0x134 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 16.
    CSR16 {
        0x138 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 17.
    CSR17 {
        0x13C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 18.
    CSR18 {
        0x140 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 19.
    CSR19 {
        0x144 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 20.
    CSR20 {
        0x148 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 21.
    CSR21 {
        0x14C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 22.
    CSR22 {
        0x150 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 23.
    CSR23 {
        0x154 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 24.
    CSR24 {
        0x158 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 25.
    CSR25 {
        0x15C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 26.
    CSR26 {
        0x160 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 27.
    CSR27 {
        0x164 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 28.
    CSR28 {
        0x168 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 29.
    CSR29 {
        0x16C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 30.
    CSR30 {
        0x170 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 31.
    CSR31 {
        0x174 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 32.
    CSR32 {
        0x178 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 33.
    CSR33 {
        0x17C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 34.
    CSR34 {
        0x180 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 35.
    CSR35 {
        0x184 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 36.
    CSR36 {
        0x188 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 37.
    CSR37 {
        0x18C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 38.
    CSR38 {
        0x190 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 39.
    CSR39 {
        0x194 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 40.
    CSR40 {
        0x198 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 41.
    CSR41 {
        0x19C 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 42.
    CSR42 {
        0x1A0 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 43.
    CSR43 {
        0x1A4 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 44.
    CSR44 {
        0x1A8 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 45.
    CSR45 {
        0x1AC 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 46.
    CSR46 {
        0x1B0 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 47.
    CSR47 {
        0x1B4 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 48.
    CSR48 {
        0x1B8 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 49.
    CSR49 {
        0x1BC 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 50.
    CSR50 {
        0x1C0 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 51.
    CSR51 {
        0x1C4 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 52.
    CSR52 {
        0x1C8 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Context swap register 53.
    CSR53 {
        0x1CC 0x20 0x0000_0000 RReg WReg;
        CSR { 0 32 RRRegField WWRegField }
    }

    /// Extended digest register 0.
    HASH_HR0 {
        0x310 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Extended digest register 1.
    HASH_HR1 {
        0x314 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Extended digest register 2.
    HASH_HR2 {
        0x318 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Extended digest register 3.
    HASH_HR3 {
        0x31C 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Extended digest register 4.
    HASH_HR4 {
        0x320 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Extended digest register 5.
    HASH_HR5 {
        0x324 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Extended digest register 6.
    HASH_HR6 {
        0x328 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }

    /// Extended digest register 7.
    HASH_HR7 {
        0x32C 0x20 0x0000_0000 RReg RoReg;
        H { 0 32 RRRegField RoRRegField }
    }
}
