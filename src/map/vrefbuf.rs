crate::periph! {
    /// Voltage reference buffer.
    pub struct VrefbufPeriph;

    VREFBUF 0x4001_0030;

    /// Control and status register.
    CSR {
        0x00 0x20 0x0000_0002 RReg WReg;
        /// Voltage reference buffer mode enable.
        ENVR { 0 1 RRRegField WWRegField }
        /// High impedance mode.
        HIZ { 1 1 RRRegField WWRegField }
        /// Voltage reference scale.
        VRS { 2 1 RRRegField WWRegField }
        /// Voltage reference buffer ready.
        VRR { 3 1 RRRegField RoRRegField }
    }

    /// Calibration control register.
    CCR {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Trimming code.
        TRIM { 0 6 RRRegField WWRegField }
    }
}
