//! Serial audio interfaces.
//!
//! Each interface has two sub-blocks described in [`sai_block`](super::sai_block).

crate::periph! {
    /// Serial audio interface.
    pub struct SaiPeriph;

    SAI1 0x4001_5400;
    SAI2 0x4001_5800;

    /// Global configuration register.
    GCR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Synchronization inputs.
        SYNCIN { 0 2 RRRegField WWRegField }
        /// Synchronization outputs.
        SYNCOUT { 4 2 RRRegField WWRegField }
    }
}
