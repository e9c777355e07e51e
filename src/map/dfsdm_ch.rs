//! Digital filter for sigma delta modulators, channel registers.
//!
//! The filter units live in [`dfsdm_flt`](super::dfsdm_flt).

crate::periph! {
    /// Digital filter for sigma delta modulators, channel registers.
    pub struct DfsdmChPeriph;

    DFSDM1_CH0 0x4001_6000;
    DFSDM1_CH1 0x4001_6020;
    DFSDM1_CH2 0x4001_6040;
    DFSDM1_CH3 0x4001_6060;
    DFSDM1_CH4 0x4001_6080;
    DFSDM1_CH5 0x4001_60A0;
    DFSDM1_CH6 0x4001_60C0;
    DFSDM1_CH7 0x4001_60E0;

    /// Channel configuration register 1.
    CHCFGR1 {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Serial interface type.
        SITP { 0 2 RRRegField WWRegField }
        /// SPI clock select.
        SPICKSEL { 2 2 RRRegField WWRegField }
        /// Short-circuit detector enable.
        SCDEN { 5 1 RRRegField WWRegField }
        /// Clock absence detector enable.
        CKABEN { 6 1 RRRegField WWRegField }
        /// Channel enable.
        CHEN { 7 1 RRRegField WWRegField }
        /// Channel inputs selection.
        CHINSEL { 8 1 RRRegField WWRegField }
        /// Input data multiplexer.
        DATMPX { 12 2 RRRegField WWRegField }
        /// Data packing mode.
        DATPACK { 14 2 RRRegField WWRegField }
        /// Output serial clock divider, channel 0 only.
        CKOUTDIV { 16 8 RRRegField WWRegField }
        /// Output serial clock source selection, channel 0 only.
        CKOUTSRC { 30 1 RRRegField WWRegField }
        /// Global enable, channel 0 only.
        DFSDMEN { 31 1 RRRegField WWRegField }
    }

    /// Channel configuration register 2.
    CHCFGR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Data right bit-shift.
        DTRBS { 3 5 RRRegField WWRegField }
        /// 24-bit calibration offset.
        OFFSET { 8 24 RRRegField WWRegField }
    }

    /// Analog watchdog and short-circuit detector register.
    CHAWSCDR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Short-circuit detector threshold.
        SCDT { 0 8 RRRegField WWRegField }
        /// Break signal assignment.
        BKSCD { 12 4 RRRegField WWRegField }
        /// Analog watchdog filter oversampling ratio.
        AWFOSR { 16 5 RRRegField WWRegField }
        /// Analog watchdog Sinc filter order.
        AWFORD { 22 2 RRRegField WWRegField }
    }

    /// Channel watchdog filter data register.
    CHWDATR {
        0x0C 0x20 0x0000_0000 RReg RoReg;
        /// Input channel watchdog data.
        WDATA { 0 16 RRRegField RoRRegField }
    }

    /// Channel data input register.
    CHDATINR {
        0x10 0x20 0x0000_0000 RReg WReg;
        INDAT0 { 0 16 RRRegField WWRegField }
        INDAT1 { 16 16 RRRegField WWRegField }
    }
}
