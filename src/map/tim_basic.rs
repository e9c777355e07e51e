//! Basic timers.

crate::periph! {
    /// Basic timer.
    pub struct TimBasicPeriph;

    TIM6 0x4000_1000;
    TIM7 0x4000_1400;

    /// Control register 1.
    CR1 {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Counter enable.
        CEN { 0 1 RRRegField WWRegField }
        /// Update disable.
        UDIS { 1 1 RRRegField WWRegField }
        /// Update request source.
        URS { 2 1 RRRegField WWRegField }
        /// One-pulse mode.
        OPM { 3 1 RRRegField WWRegField }
        /// Auto-reload preload enable.
        ARPE { 7 1 RRRegField WWRegField }
        /// UIF status bit remapping.
        UIFREMAP { 11 1 RRRegField WWRegField }
    }

    /// Control register 2.
    CR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Master mode selection.
        MMS { 4 3 RRRegField WWRegField }
    }

    /// DMA/interrupt enable register.
    DIER {
        0x0C 0x20 0x0000_0000 RReg WReg;
        /// Update interrupt enable.
        UIE { 0 1 RRRegField WWRegField }
        /// Update DMA request enable.
        UDE { 8 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// Update interrupt flag.
        UIF { 0 1 RRRegField WWRegField }
    }

    /// Event generation register.
    EGR {
        0x14 0x20 0x0000_0000 WReg WoReg;
        /// Update generation.
        UG { 0 1 WWRegField WoWRegField }
    }

    /// Counter.
    CNT {
        0x24 0x20 0x0000_0000 RReg WReg;
        /// Counter value.
        CNT { 0 16 RRRegField WWRegField }
        /// UIF copy.
        UIFCPY { 31 1 RRRegField RoRRegField }
    }

    /// Prescaler.
    PSC {
        0x28 0x20 0x0000_0000 RReg WReg;
        /// Prescaler value.
        PSC { 0 16 RRRegField WWRegField }
    }

    /// Auto-reload register.
    ARR {
        0x2C 0x20 0x0000_FFFF RReg WReg;
        /// Auto-reload value.
        ARR { 0 16 RRRegField WWRegField }
    }
}
