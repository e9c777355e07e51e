crate::periph! {
    /// System window watchdog.
    pub struct WwdgPeriph;

    WWDG 0x4000_2C00;

    /// Control register.
    CR {
        0x00 0x20 0x0000_007F RReg WReg;
        /// 7-bit counter.
        T { 0 7 RRRegField WWRegField }
        /// Activation bit.
        WDGA { 7 1 RRRegField WWRegField }
    }

    /// Configuration register.
    CFR {
        0x04 0x20 0x0000_007F RReg WReg;
        /// 7-bit window value.
        W { 0 7 RRRegField WWRegField }
        /// Timer base.
        WDGTB { 7 2 RRRegField WWRegField }
        /// Early wakeup interrupt.
        EWI { 9 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Early wakeup interrupt flag.
        EWIF { 0 1 RRRegField WWRegField }
    }
}
