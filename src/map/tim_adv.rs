//! Advanced-control timers.

crate::periph! {
    /// Advanced-control timer.
    pub struct TimAdvPeriph;

    TIM1 0x4001_2C00;
    TIM8 0x4001_3400;

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
        /// Capture/compare preloaded control.
        CCPC { 0 1 RRRegField WWRegField }
        CCUS { 2 1 RRRegField WWRegField }
        CCDS { 3 1 RRRegField WWRegField }
        /// Master mode selection.
        MMS { 4 3 RRRegField WWRegField }
        TI1S { 7 1 RRRegField WWRegField }
        OIS1 { 8 1 RRRegField WWRegField }
        OIS1N { 9 1 RRRegField WWRegField }
        OIS2 { 10 1 RRRegField WWRegField }
        OIS2N { 11 1 RRRegField WWRegField }
        OIS3 { 12 1 RRRegField WWRegField }
        OIS3N { 13 1 RRRegField WWRegField }
        OIS4 { 14 1 RRRegField WWRegField }
        OIS5 { 16 1 RRRegField WWRegField }
        OIS6 { 18 1 RRRegField WWRegField }
        /// Master mode selection 2.
        MMS2 { 20 4 RRRegField WWRegField }
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
        /// Slave mode selection, bit 3.
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
        COMIE { 5 1 RRRegField WWRegField }
        TIE { 6 1 RRRegField WWRegField }
        BIE { 7 1 RRRegField WWRegField }
        UDE { 8 1 RRRegField WWRegField }
        CC1DE { 9 1 RRRegField WWRegField }
        CC2DE { 10 1 RRRegField WWRegField }
        CC3DE { 11 1 RRRegField WWRegField }
        CC4DE { 12 1 RRRegField WWRegField }
        COMDE { 13 1 RRRegField WWRegField }
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
        COMIF { 5 1 RRRegField WWRegField }
        TIF { 6 1 RRRegField WWRegField }
        BIF { 7 1 RRRegField WWRegField }
        B2IF { 8 1 RRRegField WWRegField }
        CC1OF { 9 1 RRRegField WWRegField }
        CC2OF { 10 1 RRRegField WWRegField }
        CC3OF { 11 1 RRRegField WWRegField }
        CC4OF { 12 1 RRRegField WWRegField }
        SBIF { 13 1 RRRegField WWRegField }
        CC5IF { 16 1 RRRegField WWRegField }
        CC6IF { 17 1 RRRegField WWRegField }
    }

    /// Event generation register.
    EGR {
        0x14 0x20 0x0000_0000 WReg WoReg;
        UG { 0 1 WWRegField WoWRegField }
        CC1G { 1 1 WWRegField WoWRegField }
        CC2G { 2 1 WWRegField WoWRegField }
        CC3G { 3 1 WWRegField WoWRegField }
        CC4G { 4 1 WWRegField WoWRegField }
        COMG { 5 1 WWRegField WoWRegField }
        TG { 6 1 WWRegField WoWRegField }
        BG { 7 1 WWRegField WoWRegField }
        B2G { 8 1 WWRegField WoWRegField }
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
        CC1NE { 2 1 RRRegField WWRegField }
        CC1NP { 3 1 RRRegField WWRegField }
        CC2E { 4 1 RRRegField WWRegField }
        CC2P { 5 1 RRRegField WWRegField }
        CC2NE { 6 1 RRRegField WWRegField }
        CC2NP { 7 1 RRRegField WWRegField }
        CC3E { 8 1 RRRegField WWRegField }
        CC3P { 9 1 RRRegField WWRegField }
        CC3NE { 10 1 RRRegField WWRegField }
        CC3NP { 11 1 RRRegField WWRegField }
        CC4E { 12 1 RRRegField WWRegField }
        CC4P { 13 1 RRRegField WWRegField }
        CC4NP { 15 1 RRRegField WWRegField }
        CC5E { 16 1 RRRegField WWRegField }
        CC5P { 17 1 RRRegField WWRegField }
        CC6E { 20 1 RRRegField WWRegField }
        CC6P { 21 1 RRRegField WWRegField }
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

    /// Repetition counter register.
    RCR {
        0x30 0x20 0x0000_0000 RReg WReg;
        /// Repetition counter value.
        REP { 0 16 RRRegField WWRegField }
    }

    /// Capture/compare register 1.
    CCR1 {
        0x34 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare 1 value.
        CCR1 { 0 16 RRRegField WWRegField }
    }

    /// Capture/compare register 2.
    CCR2 {
        0x38 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare 2 value.
        CCR2 { 0 16 RRRegField WWRegField }
    }

    /// Capture/compare register 3.
    CCR3 {
        0x3C 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare 3 value.
        CCR3 { 0 16 RRRegField WWRegField }
    }

    /// Capture/compare register 4.
    CCR4 {
        0x40 0x20 0x0000_0000 RReg WReg;
        /// Capture/compare 4 value.
        CCR4 { 0 16 RRRegField WWRegField }
    }

    /// Break and dead-time register.
    BDTR {
        0x44 0x20 0x0000_0000 RReg WReg;
        /// Dead-time generator setup.
        DTG { 0 8 RRRegField WWRegField }
        /// Lock configuration.
        LOCK { 8 2 RRRegField WWRegField }
        OSSI { 10 1 RRRegField WWRegField }
        OSSR { 11 1 RRRegField WWRegField }
        /// Break enable.
        BKE { 12 1 RRRegField WWRegField }
        /// Break polarity.
        BKP { 13 1 RRRegField WWRegField }
        /// Automatic output enable.
        AOE { 14 1 RRRegField WWRegField }
        /// Main output enable.
        MOE { 15 1 RRRegField WWRegField }
        /// Break filter.
        BKF { 16 4 RRRegField WWRegField }
        BK2F { 20 4 RRRegField WWRegField }
        BK2E { 24 1 RRRegField WWRegField }
        BK2P { 25 1 RRRegField WWRegField }
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
        ETR_ADC1_RMP { 0 2 RRRegField WWRegField }
        ETR_ADC3_RMP { 2 2 RRRegField WWRegField }
        TI1_RMP { 4 1 RRRegField WWRegField }
    }

    /// Capture/compare mode register 3 (output mode).
    CCMR3_Output {
        0x54 0x20 0x0000_0000 RReg WReg;
        OC5FE { 2 1 RRRegField WWRegField }
        OC5PE { 3 1 RRRegField WWRegField }
        OC5M { 4 3 RRRegField WWRegField }
        OC5CE { 7 1 RRRegField WWRegField }
        OC6FE { 10 1 RRRegField WWRegField }
        OC6PE { 11 1 RRRegField WWRegField }
        OC6M { 12 3 RRRegField WWRegField }
        OC6CE { 15 1 RRRegField WWRegField }
        OC5M_3 { 16 1 RRRegField WWRegField }
        OC6M_3 { 24 1 RRRegField WWRegField }
    }

    /// Capture/compare register 5.
    CCR5 {
        0x58 0x20 0x0000_0000 RReg WReg;
        CCR5 { 0 16 RRRegField WWRegField }
        /// Group channel 5 and channel 1.
        GC5C1 { 29 1 RRRegField WWRegField }
        GC5C2 { 30 1 RRRegField WWRegField }
        GC5C3 { 31 1 RRRegField WWRegField }
    }

    /// Capture/compare register 6.
    CCR6 {
        0x5C 0x20 0x0000_0000 RReg WReg;
        CCR6 { 0 16 RRRegField WWRegField }
    }

    /// Option register 2.
    OR2 {
        0x60 0x20 0x0000_0001 RReg WReg;
        BKINE { 0 1 RRRegField WWRegField }
        BKCMP1E { 1 1 RRRegField WWRegField }
        BKCMP2E { 2 1 RRRegField WWRegField }
        BKDFBK0E { 8 1 RRRegField WWRegField }
        BKINP { 9 1 RRRegField WWRegField }
        BKCMP1P { 10 1 RRRegField WWRegField }
        BKCMP2P { 11 1 RRRegField WWRegField }
        ETRSEL { 14 3 RRRegField WWRegField }
    }

    /// Option register 3.
    OR3 {
        0x64 0x20 0x0000_0001 RReg WReg;
        BK2INE { 0 1 RRRegField WWRegField }
        BK2CMP1E { 1 1 RRRegField WWRegField }
        BK2CMP2E { 2 1 RRRegField WWRegField }
        BK2DFBK1E { 8 1 RRRegField WWRegField }
        BK2INP { 9 1 RRRegField WWRegField }
        BK2CMP1P { 10 1 RRRegField WWRegField }
        BK2CMP2P { 11 1 RRRegField WWRegField }
    }
}
