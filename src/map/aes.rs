crate::periph! {
    /// Advanced encryption standard hardware accelerator.
    pub struct AesPeriph;

    #[cfg(any(feature = "stm32l486", feature = "stm32l4a6"))]
    AES 0x5006_0000;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// AES enable.
        EN { 0 1 RRRegField WWRegField }
        /// Data type selection.
        DATATYPE { 1 2 RRRegField WWRegField }
        /// AES operating mode.
        MODE { 3 2 RRRegField WWRegField }
        /// AES chaining mode, low bits.
        CHMOD { 5 2 RRRegField WWRegField }
        /// Computation complete flag clear.
        CCFC { 7 1 RRRegField WWRegField }
        /// Error clear.
        ERRC { 8 1 RRRegField WWRegField }
        CCFIE { 9 1 RRRegField WWRegField }
        ERRIE { 10 1 RRRegField WWRegField }
        DMAINEN { 11 1 RRRegField WWRegField }
        DMAOUTEN { 12 1 RRRegField WWRegField }
        /// GCM or CCM phase selection.
        GCMPH { 13 2 RRRegField WWRegField }
        /// AES chaining mode, high bit.
        CHMOD2 { 16 1 RRRegField WWRegField }
        /// Key size selection.
        KEYSIZE { 18 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x04 0x20 0x0000_0000 RReg RoReg;
        /// Computation complete flag.
        CCF { 0 1 RRRegField RoRRegField }
        /// Read error flag.
        RDERR { 1 1 RRRegField RoRRegField }
        /// Write error flag.
        WRERR { 2 1 RRRegField RoRRegField }
        /// Busy flag.
        BUSY { 3 1 RRRegField RoRRegField }
    }

    /// Data input register.
    DINR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Input data word.
        DIN { 0 32 RRRegField WWRegField }
    }

    /// Data output register.
    DOUTR {
        0x0C 0x20 0x0000_0000 RReg RoReg;
        /// Output data word.
        DOUT { 0 32 RRRegField RoRRegField }
    }

    /// Key register 0.
    KEYR0 {
        0x10 0x20 0x0000_0000 RReg WReg;
        KEY { 0 32 RRRegField WWRegField }
    }

    /// Key register 1.
    KEYR1 {
        0x14 0x20 0x0000_0000 RReg WReg;
        KEY { 0 32 RRRegField WWRegField }
    }

    /// Key register 2.
    KEYR2 {
        0x18 0x20 0x0000_0000 RReg WReg;
        KEY { 0 32 RRRegField WWRegField }
    }

    /// Key register 3.
    KEYR3 {
        0x1C 0x20 0x0000_0000 RReg WReg;
        KEY { 0 32 RRRegField WWRegField }
    }

    /// Initialization vector register 0.
    IVR0 {
        0x20 0x20 0x0000_0000 RReg WReg;
        IVI { 0 32 RRRegField WWRegField }
    }

    /// Initialization vector register 1.
    IVR1 {
        0x24 0x20 0x0000_0000 RReg WReg;
        IVI { 0 32 RRRegField WWRegField }
    }

    /// Initialization vector register 2.
    IVR2 {
        0x28 0x20 0x0000_0000 RReg WReg;
        IVI { 0 32 RRRegField WWRegField }
    }

    /// Initialization vector register 3.
    IVR3 {
        0x2C 0x20 0x0000_0000 RReg WReg;
        IVI { 0 32 RRRegField WWRegField }
    }

    /// Key register 4.
    KEYR4 {
        0x30 0x20 0x0000_0000 RReg WReg;
        KEY { 0 32 RRRegField WWRegField }
    }

    /// Key register 5.
    KEYR5 {
        0x34 0x20 0x0000_0000 RReg WReg;
        KEY { 0 32 RRRegField WWRegField }
    }

    /// Key register 6.
    KEYR6 {
        0x38 0x20 0x0000_0000 RReg WReg;
        KEY { 0 32 RRRegField WWRegField }
    }

    /// Key register 7.
    KEYR7 {
        0x3C 0x20 0x0000_0000 RReg WReg;
        KEY { 0 32 RRRegField WWRegField }
    }

    /// Suspend register 0.
    SUSP0R {
        0x40 0x20 0x0000_0000 RReg WReg;
        SUSP { 0 32 RRRegField WWRegField }
    }

    /// Suspend register 1.
    SUSP1R {
        0x44 0x20 0x0000_0000 RReg WReg;
        SUSP { 0 32 RRRegField WWRegField }
    }

    /// Suspend register 2.
    SUSP2R {
        0x48 0x20 0x0000_0000 RReg WReg;
        SUSP { 0 32 RRRegField WWRegField }
    }

    /// Suspend register 3.
    SUSP3R {
        0x4C 0x20 0x0000_0000 RReg WReg;
        SUSP { 0 32 RRRegField WWRegField }
    }

    /// Suspend register 4.
    SUSP4R {
        0x50 0x20 0x0000_0000 RReg WReg;
        SUSP { 0 32 RRRegField WWRegField }
    }

    /// Suspend register 5.
    SUSP5R {
        0x54 0x20 0x0000_0000 RReg WReg;
        SUSP { 0 32 RRRegField WWRegField }
    }

    /// Suspend register 6.
    SUSP6R {
        0x58 0x20 0x0000_0000 RReg WReg;
        SUSP { 0 32 RRRegField WWRegField }
    }

    /// Suspend register 7.
    SUSP7R {
        0x5C 0x20 0x0000_0000 RReg WReg;
        SUSP { 0 32 RRRegField WWRegField }
    }
}
