crate::periph! {
    /// Clock recovery system.
    pub struct CrsPeriph;

    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    CRS 0x4000_6000;

    /// Control register.
    CR {
        0x00 0x20 0x0000_2000 RReg WReg;
        SYNCOKIE { 0 1 RRRegField WWRegField }
        SYNCWARNIE { 1 1 RRRegField WWRegField }
        ERRIE { 2 1 RRRegField WWRegField }
        ESYNCIE { 3 1 RRRegField WWRegField }
        /// Frequency error counter enable.
        CEN { 5 1 RRRegField WWRegField }
        /// Automatic trimming enable.
        AUTOTRIMEN { 6 1 RRRegField WWRegField }
        /// Generate software SYNC event.
        SWSYNC { 7 1 RRRegField WWRegField }
        /// HSI48 oscillator smooth trimming.
        TRIM { 8 6 RRRegField WWRegField }
    }

    /// Configuration register.
    CFGR {
        0x04 0x20 0x2022_BB7F RReg WReg;
        /// Counter reload value.
        RELOAD { 0 16 RRRegField WWRegField }
        /// Frequency error limit.
        FELIM { 16 8 RRRegField WWRegField }
        /// SYNC divider.
        SYNCDIV { 24 3 RRRegField WWRegField }
        /// SYNC signal source selection.
        SYNCSRC { 28 2 RRRegField WWRegField }
        /// SYNC polarity selection.
        SYNCPOL { 31 1 RRRegField WWRegField }
    }

    /// Interrupt and status register.
    ISR {
        0x08 0x20 0x0000_0000 RReg RoReg;
        SYNCOKF { 0 1 RRRegField RoRRegField }
        SYNCWARNF { 1 1 RRRegField RoRRegField }
        ERRF { 2 1 RRRegField RoRRegField }
        ESYNCF { 3 1 RRRegField RoRRegField }
        SYNCERR { 8 1 RRRegField RoRRegField }
        SYNCMISS { 9 1 RRRegField RoRRegField }
        TRIMOVF { 10 1 RRRegField RoRRegField }
        FEDIR { 15 1 RRRegField RoRRegField }
        FECAP { 16 16 RRRegField RoRRegField }
    }

    /// Interrupt flag clear register.
    ICR {
        0x0C 0x20 0x0000_0000 WReg WoReg;
        SYNCOKC { 0 1 WWRegField WoWRegField }
        SYNCWARNC { 1 1 WWRegField WoWRegField }
        ERRC { 2 1 WWRegField WoWRegField }
        ESYNCC { 3 1 WWRegField WoWRegField }
    }
}
