crate::periph! {
    /// Independent watchdog.
    pub struct IwdgPeriph;

    IWDG 0x4000_3000;

    /// Key register.
    KR {
        0x00 0x20 0x0000_0000 WReg WoReg;
        /// Key value.
        KEY { 0 16 WWRegField WoWRegField }
    }

    /// Prescaler register.
    PR {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Prescaler divider.
        PR { 0 3 RRRegField WWRegField }
    }

    /// Reload register.
    RLR {
        0x08 0x20 0x0000_0FFF RReg WReg;
        /// Watchdog counter reload value.
        RL { 0 12 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x0C 0x20 0x0000_0000 RReg RoReg;
        /// Watchdog prescaler value update.
        PVU { 0 1 RRRegField RoRRegField }
        /// Watchdog counter reload value update.
        RVU { 1 1 RRRegField RoRRegField }
        /// Watchdog counter window value update.
        WVU { 2 1 RRRegField RoRRegField }
    }

    /// Window register.
    WINR {
        0x10 0x20 0x0000_0FFF RReg WReg;
        /// Watchdog counter window value.
        WIN { 0 12 RRRegField WWRegField }
    }
}
