crate::periph! {
    /// Cyclic redundancy check calculation unit.
    pub struct CrcPeriph;

    CRC 0x4002_3000;

    /// Data register.
    DR {
        0x00 0x20 0xFFFF_FFFF RReg WReg;
        /// Data register bits.
        DR { 0 32 RRRegField WWRegField }
    }

    /// Independent data register.
    IDR {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// General-purpose 8-bit data register bits.
        IDR { 0 8 RRRegField WWRegField }
    }

    /// Control register.
    CR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Resets the CRC calculation unit.
        RESET { 0 1 RRRegField WWRegField }
        /// Polynomial size.
        POLYSIZE { 3 2 RRRegField WWRegField }
        /// Reverse input data.
        REV_IN { 5 2 RRRegField WWRegField }
        /// Reverse output data.
        REV_OUT { 7 1 RRRegField WWRegField }
    }

    /// Initial CRC value.
    INIT {
        0x10 0x20 0xFFFF_FFFF RReg WReg;
        CRC_INIT { 0 32 RRRegField WWRegField }
    }

    /// CRC polynomial.
    POL {
        0x14 0x20 0x04C1_1DB7 RReg WReg;
        POL { 0 32 RRRegField WWRegField }
    }
}
