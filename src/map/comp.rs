//! Comparators.

crate::periph! {
    /// Comparator.
    pub struct CompPeriph;

    COMP1 0x4001_0200;
    COMP2 0x4001_0204;

    /// Comparator control and status register.
    CSR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Comparator enable.
        EN { 0 1 RRRegField WWRegField }
        /// Power mode.
        PWRMODE { 2 2 RRRegField WWRegField }
        /// Input minus selection.
        INMSEL { 4 3 RRRegField WWRegField }
        /// Input plus selection.
        INPSEL { 7 1 RRRegField WWRegField }
        /// Window mode, COMP2 only.
        WINMODE { 9 1 RRRegField WWRegField }
        POLARITY { 15 1 RRRegField WWRegField }
        /// Hysteresis selection.
        HYST { 16 2 RRRegField WWRegField }
        BLANKING { 18 3 RRRegField WWRegField }
        /// Scaler bridge enable.
        BRGEN { 22 1 RRRegField WWRegField }
        /// Voltage scaler enable.
        SCALEN { 23 1 RRRegField WWRegField }
        INMESEL { 25 2 RRRegField WWRegField }
        /// Comparator output status.
        VALUE { 30 1 RRRegField RoRRegField }
        /// Lock.
        LOCK { 31 1 RRRegField WWRegField }
    }
}
