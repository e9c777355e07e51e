crate::periph! {
    /// Random number generator.
    pub struct RngPeriph;

    RNG 0x5006_0800;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Random number generator enable.
        RNGEN { 2 1 RRRegField WWRegField }
        /// Interrupt enable.
        IE { 3 1 RRRegField WWRegField }
        /// Clock error detection.
        CED { 5 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Data ready.
        DRDY { 0 1 RRRegField RoRRegField }
        /// Clock error current status.
        CECS { 1 1 RRRegField RoRRegField }
        /// Seed error current status.
        SECS { 2 1 RRRegField RoRRegField }
        /// Clock error interrupt status.
        CEIS { 5 1 RRRegField WWRegField }
        /// Seed error interrupt status.
        SEIS { 6 1 RRRegField WWRegField }
    }

    /// Data register.
    DR {
        0x08 0x20 0x0000_0000 RReg RoReg;
        /// Random data.
        RNDATA { 0 32 RRRegField RoRRegField }
    }
}
