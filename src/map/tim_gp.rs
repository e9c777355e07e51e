//! General-purpose timers.

crate::periph! {
    /// General-purpose timer.
    pub struct TimGpPeriph;

    /// 32-bit general-purpose timer.
    TIM2 0x4000_0000;
    TIM3 0x4000_0400;
    TIM4 0x4000_0800;
    /// 32-bit general-purpose timer.
    TIM5 0x4000_0C00;

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
        /// Direction.
        DIR { 4 1 RRRegField WWRegField }
        /// Center-aligned mode selection.
        CMS { 5 2 RRRegField WWRegField }
        /// Auto-reload preload enable.
        ARPE { 7 1 RRRegField WWRegField }
        /// Clock division.
        CKD { 8 2 RRRegField WWRegField }
        /// UIF status bit remapping.
        UIFREMAP { 11 1 RRRegField WWRegField }
    }

    /// Control register 2.
    CR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare DMA selection.
        CCDS { 3 1 RRRegField WWRegField }
        /// Master mode selection.
        MMS { 4 3 RRRegField WWRegField }
        /// TI1 selection.
        TI1S { 7 1 RRRegField WWRegField }
    }

    /// Slave mode control register.
    SMCR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Slave mode selection.
        SMS { 0 3 RRRegField WWRegField }
        OCCS { 3 1 RRRegField WWRegField }
        /// Trigger selection.
        TS { 4 3 RRRegField WWRegField }
        MSM { 7 1 RRRegField WWRegField }
        ETF { 8 4 RRRegField WWRegField }
        ETPS { 12 2 RRRegField WWRegField }
        ECE { 14 1 RRRegField WWRegField }
        ETP { 15 1 RRRegField WWRegField }
        SMS_3 { 16 1 RRRegField WWRegField }
    }

    /// DMA/interrupt enable register.
    DIER {
        0x0C 0x20 0x0000_0000 RReg WReg;
        UIE { 0 1 RRRegField WWRegField }
        CC1IE { 1 1 RRRegField WWRegField }
        CC2IE { 2 1 RRRegField WWRegField }
        CC3IE { 3 1 RRRegField WWRegField }
        CC4IE { 4 1 RRRegField WWRegField }
        TIE { 6 1 RRRegField WWRegField }
        UDE { 8 1 RRRegField WWRegField }
        CC1DE { 9 1 RRRegField WWRegField }
        CC2DE { 10 1 RRRegField WWRegField }
        CC3DE { 11 1 RRRegField WWRegField }
        CC4DE { 12 1 RRRegField WWRegField }
        TDE { 14 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x10 0x20 0x0000_0000 RReg WReg;
        UIF { 0 1 RRRegField WWRegField }
        CC1IF { 1 1 RRRegField WWRegField }
        CC2IF { 2 1 RRRegField WWRegField }
        CC3IF { 3 1 RRRegField WWRegField }
        CC4IF { 4 1 RRRegField WWRegField }
        TIF { 6 1 RRRegField WWRegField }
        CC1OF { 9 1 RRRegField WWRegField }
        CC2OF { 10 1 RRRegField WWRegField }
        CC3OF { 11 1 RRRegField WWRegField }
        CC4OF { 12 1 RRRegField WWRegField }
    }

    /// Event generation register.
    EGR {
        0x14 0x20 0x0000_0000 WReg WoReg;
        UG { 0 1 WWRegField WoWRegField }
        CC1G { 1 1 WWRegField WoWRegField }
        CC2G { 2 1 WWRegField WoWRegField }
        CC3G { 3 1 WWRegField WoWRegField }
        CC4G { 4 1 WWRegField WoWRegField }
        TG { 6 1 WWRegField WoWRegField }
    }

    /// Capture/compare mode register 1 (output mode).
    CCMR1_Output {
        0x18 0x20 0x0000_0000 RReg WReg;
        /// Capture/Compare 1 selection.
        CC1S { 0 2 RRRegField WWRegField }
        OC1FE { 2 1 RRRegField WWRegField }
        OC1PE { 3 1 RRRegField WWRegField }
        /// Output compare 1 mode.
        OC1M { 4 3 RRRegField WWRegField }
        OC1CE { 7 1 RRRegField WWRegField }
        CC2S { 8 2 RRRegField WWRegField }
        OC2FE { 10 1 RRRegField WWRegField }
        OC2PE { 11 1 RRRegField WWRegField }
        /// Output compare 2 mode.
        OC2M { 12 3 RRRegField WWRegField }
        OC2CE { 15 1 RRRegField WWRegField }
        /// Output compare 1 mode, bit 3.
        OC1M_3 { 16 1 RRRegField WWRegField }
        /// Output compare 2 mode, bit 3.
        OC2M_3 { 24 1 RRRegField WWRegField }
    }

    /// Capture/compare mode register 1 (input mode).
    CCMR1_Input @CCMR1_Output {
        0x18 0x20 0x0000_0000 RReg WReg;
        CC1S { 0 2 RRRegField WWRegField }
        /// Input capture 1 prescaler.
        IC1PSC { 2 2 RRRegField WWRegField }
        /// Input capture 1 filter.
        IC1F { 4 4 RRRegField WWRegField }
        CC2S { 8 2 RRRegField WWRegField }
        /// Input capture 2 prescaler.
        IC2PSC { 10 2 RRRegField WWRegField }
        /// Input capture 2 filter.
        IC2F { 12 4 RRRegField WWRegField }
    }

    /// Capture/compare mode register 2 (output mode).
    CCMR2_Output {
        0x1C 0x20 0x0000_0000 RReg WReg;
        /// Capture/Compare 3 selection.
        CC3S { 0 2 RRRegField WWRegField }
        OC3FE { 2 1 RRRegField WWRegField }
        OC3PE { 3 1 RRRegField WWRegField }
        /// Output compare 3 mode.
        OC3M { 4 3 RRRegField WWRegField }
        OC3CE { 7 1 RRRegField WWRegField }
        CC4S { 8 2 RRRegField WWRegField }
        OC4FE { 10 1 RRRegField WWRegField }
        OC4PE { 11 1 RRRegField WWRegField }
        /// Output compare 4 mode.
        OC4M { 12 3 RRRegField WWRegField }
        OC4CE { 15 1 RRRegField WWRegField }
        /// Output compare 3 mode, bit 3.
        OC3M_3 { 16 1 RRRegField WWRegField }
        /// Output compare 4 mode, bit 3.
        OC4M_3 { 24 1 RRRegField WWRegField }
    }

    /// Capture/compare mode register 2 (input mode).
    CCMR2_Input @CCMR2_Output {
        0x1C 0x20 0x0000_0000 RReg WReg;
        CC3S { 0 2 RRRegField WWRegField }
        /// Input capture 3 prescaler.
        IC3PSC { 2 2 RRRegField WWRegField }
        /// Input capture 3 filter.
        IC3F { 4 4 RRRegField WWRegField }
        CC4S { 8 2 RRRegField WWRegField }
        /// Input capture 4 prescaler.
        IC4PSC { 10 2 RRRegField WWRegField }
        /// Input capture 4 filter.
        IC4F { 12 4 RRRegField WWRegField }
    }

    /// Capture/compare enable register.
    CCER {
        0x20 0x20 0x0000_0000 RReg WReg;
        CC1E { 0 1 RRRegField WWRegField }
        CC1P { 1 1 RRRegField WWRegField }
        CC1NP { 3 1 RRRegField WWRegField }
        CC2E { 4 1 RRRegField WWRegField }
        CC2P { 5 1 RRRegField WWRegField }
        CC2NP { 7 1 RRRegField WWRegField }
        CC3E { 8 1 RRRegField WWRegField }
        CC3P { 9 1 RRRegField WWRegField }
        CC3NP { 11 1 RRRegField WWRegField }
        CC4E { 12 1 RRRegField WWRegField }
        CC4P { 13 1 RRRegField WWRegField }
        CC4NP { 15 1 RRRegField WWRegField }
    }

    /// Counter.
    CNT {
        0x24 0x20 0x0000_0000 RReg WReg;
        /// Counter value.
        CNT { 0 32 RRRegField WWRegField }
    }

    /// Prescaler.
    PSC {
        0x28 0x20 0x0000_0000 RReg WReg;
        /// Prescaler value.
        PSC { 0 16 RRRegField WWRegField }
    }

    /// Auto-reload register.
    ARR {
        0x2C 0x20 0xFFFF_FFFF RReg WReg;
        /// Auto-reload value.
        ARR { 0 32 RRRegField WWRegField }
    }

    /// Capture/compare register 1.
    CCR1 {
        0x34 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare 1 value.
        CCR1 { 0 32 RRRegField WWRegField }
    }

    /// Capture/compare register 2.
    CCR2 {
        0x38 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare 2 value.
        CCR2 { 0 32 RRRegField WWRegField }
    }

    /// Capture/compare register 3.
    CCR3 {
        0x3C 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare 3 value.
        CCR3 { 0 32 RRRegField WWRegField }
    }

    /// Capture/compare register 4.
    CCR4 {
        0x40 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare 4 value.
        CCR4 { 0 32 RRRegField WWRegField }
    }

    /// DMA control register.
    DCR {
        0x48 0x20 0x0000_0000 RReg WReg;
        /// DMA base address.
        DBA { 0 5 RRRegField WWRegField }
        /// DMA burst length.
        DBL { 8 5 RRRegField WWRegField }
    }

    /// DMA address for full transfer.
    DMAR {
        0x4C 0x20 0x0000_0000 RReg WReg;
        /// DMA register for burst accesses.
        DMAB { 0 16 RRRegField WWRegField }
    }

    /// Option register 1.
    OR1 {
        0x50 0x20 0x0000_0000 RReg WReg;
        /// Internal trigger 1 remap.
        ITR1_RMP { 0 1 RRRegField WWRegField }
        ETR1_RMP { 1 1 RRRegField WWRegField }
        TI4_RMP { 2 2 RRRegField WWRegField }
    }

    /// Option register 2.
    OR2 {
        0x60 0x20 0x0000_0000 RReg WReg;
        /// ETR source selection.
        ETRSEL { 14 3 RRRegField WWRegField }
    }
}
