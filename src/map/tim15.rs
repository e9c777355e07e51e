crate::periph! {
    /// General-purpose timer with two channels.
    pub struct Tim15Periph;

    TIM15 0x4001_4000;

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
        /// Clock division.
        CKD { 8 2 RRRegField WWRegField }
        /// UIF status bit remapping.
        UIFREMAP { 11 1 RRRegField WWRegField }
    }

    /// Control register 2.
    CR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        CCPC { 0 1 RRRegField WWRegField }
        CCUS { 2 1 RRRegField WWRegField }
        CCDS { 3 1 RRRegField WWRegField }
        MMS { 4 3 RRRegField WWRegField }
        TI1S { 7 1 RRRegField WWRegField }
        OIS1 { 8 1 RRRegField WWRegField }
        OIS1N { 9 1 RRRegField WWRegField }
        OIS2 { 10 1 RRRegField WWRegField }
    }

    /// Slave mode control register.
    SMCR {
        0x08 0x20 0x0000_0000 RReg WReg;
        SMS { 0 3 RRRegField WWRegField }
        TS { 4 3 RRRegField WWRegField }
        MSM { 7 1 RRRegField WWRegField }
        SMS_3 { 16 1 RRRegField WWRegField }
    }

    /// DMA/interrupt enable register.
    DIER {
        0x0C 0x20 0x0000_0000 RReg WReg;
        UIE { 0 1 RRRegField WWRegField }
        CC1IE { 1 1 RRRegField WWRegField }
        CC2IE { 2 1 RRRegField WWRegField }
        COMIE { 5 1 RRRegField WWRegField }
        TIE { 6 1 RRRegField WWRegField }
        BIE { 7 1 RRRegField WWRegField }
        UDE { 8 1 RRRegField WWRegField }
        CC1DE { 9 1 RRRegField WWRegField }
        COMDE { 13 1 RRRegField WWRegField }
        TDE { 14 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x10 0x20 0x0000_0000 RReg WReg;
        UIF { 0 1 RRRegField WWRegField }
        CC1IF { 1 1 RRRegField WWRegField }
        CC2IF { 2 1 RRRegField WWRegField }
        COMIF { 5 1 RRRegField WWRegField }
        TIF { 6 1 RRRegField WWRegField }
        BIF { 7 1 RRRegField WWRegField }
        CC1OF { 9 1 RRRegField WWRegField }
        CC2OF { 10 1 RRRegField WWRegField }
    }

    /// Event generation register.
    EGR {
        0x14 0x20 0x0000_0000 WReg WoReg;
        UG { 0 1 WWRegField WoWRegField }
        CC1G { 1 1 WWRegField WoWRegField }
        CC2G { 2 1 WWRegField WoWRegField }
        COMG { 5 1 WWRegField WoWRegField }
        TG { 6 1 WWRegField WoWRegField }
        BG { 7 1 WWRegField WoWRegField }
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
        CC2S { 8 2 RRRegField WWRegField }
        OC2FE { 10 1 RRRegField WWRegField }
        OC2PE { 11 1 RRRegField WWRegField }
        /// Output compare 2 mode.
        OC2M { 12 3 RRRegField WWRegField }
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

    /// Capture/compare enable register.
    CCER {
        0x20 0x20 0x0000_0000 RReg WReg;
        CC1E { 0 1 RRRegField WWRegField }
        CC1P { 1 1 RRRegField WWRegField }
        CC1NE { 2 1 RRRegField WWRegField }
        CC1NP { 3 1 RRRegField WWRegField }
        CC2E { 4 1 RRRegField WWRegField }
        CC2P { 5 1 RRRegField WWRegField }
        CC2NP { 7 1 RRRegField WWRegField }
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
        REP { 0 8 RRRegField WWRegField }
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
        TI1_RMP { 0 1 RRRegField WWRegField }
        ENCODER_MODE { 1 2 RRRegField WWRegField }
    }

    /// Option register 2.
    OR2 {
        0x60 0x20 0x0000_0001 RReg WReg;
        BKINE { 0 1 RRRegField WWRegField }
        BKCMP1E { 1 1 RRRegField WWRegField }
        BKCMP2E { 2 1 RRRegField WWRegField }
        BKDF1BK0E { 8 1 RRRegField WWRegField }
        BKINP { 9 1 RRRegField WWRegField }
        BKCMP1P { 10 1 RRRegField WWRegField }
        BKCMP2P { 11 1 RRRegField WWRegField }
    }
}
