//! Low-power timers.

crate::periph! {
    /// Low-power timer.
    pub struct LptimPeriph;

    LPTIM1 0x4000_7C00;
    LPTIM2 0x4000_9400;

    /// Interrupt and status register.
    ISR {
        0x00 0x20 0x0000_0000 RReg RoReg;
        CMPM { 0 1 RRRegField RoRRegField }
        ARRM { 1 1 RRRegField RoRRegField }
        EXTTRIG { 2 1 RRRegField RoRRegField }
        CMPOK { 3 1 RRRegField RoRRegField }
        ARROK { 4 1 RRRegField RoRRegField }
        UP { 5 1 RRRegField RoRRegField }
        DOWN { 6 1 RRRegField RoRRegField }
    }

    /// Interrupt clear register.
    ICR {
        0x04 0x20 0x0000_0000 WReg WoReg;
        CMPMCF { 0 1 WWRegField WoWRegField }
        ARRMCF { 1 1 WWRegField WoWRegField }
        EXTTRIGCF { 2 1 WWRegField WoWRegField }
        CMPOKCF { 3 1 WWRegField WoWRegField }
        ARROKCF { 4 1 WWRegField WoWRegField }
        UPCF { 5 1 WWRegField WoWRegField }
        DOWNCF { 6 1 WWRegField WoWRegField }
    }

    /// Interrupt enable register.
    IER {
        0x08 0x20 0x0000_0000 RReg WReg;
        CMPMIE { 0 1 RRRegField WWRegField }
        ARRMIE { 1 1 RRRegField WWRegField }
        EXTTRIGIE { 2 1 RRRegField WWRegField }
        CMPOKIE { 3 1 RRRegField WWRegField }
        ARROKIE { 4 1 RRRegField WWRegField }
        UPIE { 5 1 RRRegField WWRegField }
        DOWNIE { 6 1 RRRegField WWRegField }
    }

    /// Configuration register.
    CFGR {
        0x0C 0x20 0x0000_0000 RReg WReg;
        /// Clock selector.
        CKSEL { 0 1 RRRegField WWRegField }
        /// Clock polarity.
        CKPOL { 1 2 RRRegField WWRegField }
        CKFLT { 3 2 RRRegField WWRegField }
        TRGFLT { 6 2 RRRegField WWRegField }
        /// Clock prescaler.
        PRESC { 9 3 RRRegField WWRegField }
        /// Trigger selector.
        TRIGSEL { 13 3 RRRegField WWRegField }
        TRIGEN { 17 2 RRRegField WWRegField }
        TIMOUT { 19 1 RRRegField WWRegField }
        /// Waveform shape.
        WAVE { 20 1 RRRegField WWRegField }
        WAVPOL { 21 1 RRRegField WWRegField }
        /// Registers update mode.
        PRELOAD { 22 1 RRRegField WWRegField }
        COUNTMODE { 23 1 RRRegField WWRegField }
        /// Encoder mode enable.
        ENC { 24 1 RRRegField WWRegField }
    }

    /// Control register.
    CR {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// LPTIM enable.
        ENABLE { 0 1 RRRegField WWRegField }
        /// LPTIM start in single mode.
        SNGSTRT { 1 1 RRRegField WWRegField }
        /// Timer start in continuous mode.
        CNTSTRT { 2 1 RRRegField WWRegField }
    }

    /// Compare register.
    CMP {
        0x14 0x20 0x0000_0000 RReg WReg;
        /// Compare value.
        CMP { 0 16 RRRegField WWRegField }
    }

    /// Autoreload register.
    ARR {
        0x18 0x20 0x0000_0001 RReg WReg;
        /// Auto reload value.
        ARR { 0 16 RRRegField WWRegField }
    }

    /// Counter register.
    CNT {
        0x1C 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 16 RRRegField RoRRegField }
    }

    /// Option register.
    OR {
        0x20 0x20 0x0000_0000 RReg WReg;
        OR_0 { 0 1 RRRegField WWRegField }
        OR_1 { 1 1 RRRegField WWRegField }
    }
}
