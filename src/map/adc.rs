//! Analog-to-digital converters.

crate::periph! {
    /// Analog-to-digital converter.
    pub struct AdcPeriph;

    /// ADC master.
    ADC1 0x5004_0000;
    /// ADC slave.
    ADC2 0x5004_0100;
    ADC3 0x5004_0200;

    /// Interrupt and status register.
    ISR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// ADC ready.
        ADRDY { 0 1 RRRegField WWRegField }
        /// End of sampling flag.
        EOSMP { 1 1 RRRegField WWRegField }
        /// End of conversion flag.
        EOC { 2 1 RRRegField WWRegField }
        /// End of regular sequence flag.
        EOS { 3 1 RRRegField WWRegField }
        /// ADC overrun.
        OVR { 4 1 RRRegField WWRegField }
        JEOC { 5 1 RRRegField WWRegField }
        JEOS { 6 1 RRRegField WWRegField }
        AWD1 { 7 1 RRRegField WWRegField }
        AWD2 { 8 1 RRRegField WWRegField }
        AWD3 { 9 1 RRRegField WWRegField }
        JQOVF { 10 1 RRRegField WWRegField }
    }

    /// Interrupt enable register.
    IER {
        0x04 0x20 0x0000_0000 RReg WReg;
        ADRDYIE { 0 1 RRRegField WWRegField }
        EOSMPIE { 1 1 RRRegField WWRegField }
        EOCIE { 2 1 RRRegField WWRegField }
        EOSIE { 3 1 RRRegField WWRegField }
        OVRIE { 4 1 RRRegField WWRegField }
        JEOCIE { 5 1 RRRegField WWRegField }
        JEOSIE { 6 1 RRRegField WWRegField }
        AWD1IE { 7 1 RRRegField WWRegField }
        AWD2IE { 8 1 RRRegField WWRegField }
        AWD3IE { 9 1 RRRegField WWRegField }
        JQOVFIE { 10 1 RRRegField WWRegField }
    }

    /// Control register.
    CR {
        0x08 0x20 0x2000_0000 RReg WReg;
        /// ADC enable control.
        ADEN { 0 1 RRRegField WWRegField }
        /// ADC disable command.
        ADDIS { 1 1 RRRegField WWRegField }
        /// ADC start of regular conversion.
        ADSTART { 2 1 RRRegField WWRegField }
        /// ADC start of injected conversion.
        JADSTART { 3 1 RRRegField WWRegField }
        /// ADC stop of regular conversion command.
        ADSTP { 4 1 RRRegField WWRegField }
        /// ADC stop of injected conversion command.
        JADSTP { 5 1 RRRegField WWRegField }
        /// ADC voltage regulator enable.
        ADVREGEN { 28 1 RRRegField WWRegField }
        /// Deep-power-down enable.
        DEEPPWD { 29 1 RRRegField WWRegField }
        /// Differential mode for calibration.
        ADCALDIF { 30 1 RRRegField WWRegField }
        /// ADC calibration.
        ADCAL { 31 1 RRRegField WWRegField }
    }

    /// Configuration register.
    CFGR {
        0x0C 0x20 0x8000_0000 RReg WReg;
        /// Direct memory access enable.
        DMAEN { 0 1 RRRegField WWRegField }
        DMACFG { 1 1 RRRegField WWRegField }
        DFSDMCFG { 2 1 RRRegField WWRegField }
        /// Data resolution.
        RES { 3 2 RRRegField WWRegField }
        /// Data alignment.
        ALIGN { 5 1 RRRegField WWRegField }
        /// External trigger selection for regular group.
        EXTSEL { 6 4 RRRegField WWRegField }
        /// External trigger enable and polarity selection for regular channels.
        EXTEN { 10 2 RRRegField WWRegField }
        OVRMOD { 12 1 RRRegField WWRegField }
        /// Single / continuous conversion mode.
        CONT { 13 1 RRRegField WWRegField }
        AUTDLY { 14 1 RRRegField WWRegField }
        DISCEN { 16 1 RRRegField WWRegField }
        DISCNUM { 17 3 RRRegField WWRegField }
        JDISCEN { 20 1 RRRegField WWRegField }
        JQM { 21 1 RRRegField WWRegField }
        AWD1SGL { 22 1 RRRegField WWRegField }
        AWD1EN { 23 1 RRRegField WWRegField }
        JAWD1EN { 24 1 RRRegField WWRegField }
        JAUTO { 25 1 RRRegField WWRegField }
        AWD1CH { 26 5 RRRegField WWRegField }
        JQDIS { 31 1 RRRegField WWRegField }
    }

    /// Configuration register 2.
    CFGR2 {
        0x10 0x20 0x0000_0000 RReg WReg;
        ROVSE { 0 1 RRRegField WWRegField }
        JOVSE { 1 1 RRRegField WWRegField }
        /// Oversampling ratio.
        OVSR { 2 3 RRRegField WWRegField }
        /// Oversampling shift.
        OVSS { 5 4 RRRegField WWRegField }
        TROVS { 9 1 RRRegField WWRegField }
        ROVSM { 10 1 RRRegField WWRegField }
    }

    /// Sample time register 1.
    SMPR1 {
        0x14 0x20 0x0000_0000 RReg WReg;
        SMP0 { 0 3 RRRegField WWRegField }
        SMP1 { 3 3 RRRegField WWRegField }
        SMP2 { 6 3 RRRegField WWRegField }
        SMP3 { 9 3 RRRegField WWRegField }
        SMP4 { 12 3 RRRegField WWRegField }
        SMP5 { 15 3 RRRegField WWRegField }
        SMP6 { 18 3 RRRegField WWRegField }
        SMP7 { 21 3 RRRegField WWRegField }
        SMP8 { 24 3 RRRegField WWRegField }
        SMP9 { 27 3 RRRegField WWRegField }
    }

    /// Sample time register 2.
    SMPR2 {
        0x18 0x20 0x0000_0000 RReg WReg;
        SMP10 { 0 3 RRRegField WWRegField }
        SMP11 { 3 3 RRRegField WWRegField }
        SMP12 { 6 3 RRRegField WWRegField }
        SMP13 { 9 3 RRRegField WWRegField }
        SMP14 { 12 3 RRRegField WWRegField }
        SMP15 { 15 3 RRRegField WWRegField }
        SMP16 { 18 3 RRRegField WWRegField }
        SMP17 { 21 3 RRRegField WWRegField }
        SMP18 { 24 3 RRRegField WWRegField }
    }

    /// Watchdog threshold register 1.
    TR1 {
        0x20 0x20 0x0FFF_0000 RReg WReg;
        /// Analog watchdog 1 lower threshold.
        LT1 { 0 12 RRRegField WWRegField }
        /// Analog watchdog 1 higher threshold.
        HT1 { 16 12 RRRegField WWRegField }
    }

    /// Watchdog threshold register 2.
    TR2 {
        0x24 0x20 0x00FF_0000 RReg WReg;
        LT2 { 0 8 RRRegField WWRegField }
        HT2 { 16 8 RRRegField WWRegField }
    }

    /// Watchdog threshold register 3.
    TR3 {
        0x28 0x20 0x00FF_0000 RReg WReg;
        LT3 { 0 8 RRRegField WWRegField }
        HT3 { 16 8 RRRegField WWRegField }
    }

    /// Regular sequence register 1.
    SQR1 {
        0x30 0x20 0x0000_0000 RReg WReg;
        /// Regular channel sequence length.
        L { 0 4 RRRegField WWRegField }
        SQ1 { 6 5 RRRegField WWRegField }
        SQ2 { 12 5 RRRegField WWRegField }
        SQ3 { 18 5 RRRegField WWRegField }
        SQ4 { 24 5 RRRegField WWRegField }
    }

    /// Regular sequence register 2.
    SQR2 {
        0x34 0x20 0x0000_0000 RReg WReg;
        SQ5 { 0 5 RRRegField WWRegField }
        SQ6 { 6 5 RRRegField WWRegField }
        SQ7 { 12 5 RRRegField WWRegField }
        SQ8 { 18 5 RRRegField WWRegField }
        SQ9 { 24 5 RRRegField WWRegField }
    }

    /// Regular sequence register 3.
    SQR3 {
        0x38 0x20 0x0000_0000 RReg WReg;
        SQ10 { 0 5 RRRegField WWRegField }
        SQ11 { 6 5 RRRegField WWRegField }
        SQ12 { 12 5 RRRegField WWRegField }
        SQ13 { 18 5 RRRegField WWRegField }
        SQ14 { 24 5 RRRegField WWRegField }
    }

    /// Regular sequence register 4.
    SQR4 {
        0x3C 0x20 0x0000_0000 RReg WReg;
        SQ15 { 0 5 RRRegField WWRegField }
        SQ16 { 6 5 RRRegField WWRegField }
    }

    /// Regular data register.
    DR {
        0x40 0x20 0x0000_0000 RReg RoReg;
        /// Regular data converted.
        RDATA { 0 16 RRRegField RoRRegField }
    }

    /// Injected sequence register.
    JSQR {
        0x4C 0x20 0x0000_0000 RReg WReg;
        JL { 0 2 RRRegField WWRegField }
        JEXTSEL { 2 4 RRRegField WWRegField }
        JEXTEN { 6 2 RRRegField WWRegField }
        JSQ1 { 8 5 RRRegField WWRegField }
        JSQ2 { 14 5 RRRegField WWRegField }
        JSQ3 { 20 5 RRRegField WWRegField }
        JSQ4 { 26 5 RRRegField WWRegField }
    }

    /// Offset register 1.
    OFR1 {
        0x60 0x20 0x0000_0000 RReg WReg;
        /// Data offset 1 for the channel programmed into OFFSET1_CH.
        OFFSET1 { 0 12 RRRegField WWRegField }
        OFFSET1_CH { 26 5 RRRegField WWRegField }
        OFFSET1_EN { 31 1 RRRegField WWRegField }
    }

    /// Offset register 2.
    OFR2 {
        0x64 0x20 0x0000_0000 RReg WReg;
        /// Data offset 2 for the channel programmed into OFFSET2_CH.
        OFFSET2 { 0 12 RRRegField WWRegField }
        OFFSET2_CH { 26 5 RRRegField WWRegField }
        OFFSET2_EN { 31 1 RRRegField WWRegField }
    }

    /// Offset register 3.
    OFR3 {
        0x68 0x20 0x0000_0000 RReg WReg;
        /// Data offset 3 for the channel programmed into OFFSET3_CH.
        OFFSET3 { 0 12 RRRegField WWRegField }
        OFFSET3_CH { 26 5 RRRegField WWRegField }
        OFFSET3_EN { 31 1 RRRegField WWRegField }
    }

    /// Offset register 4.
    OFR4 {
        0x6C 0x20 0x0000_0000 RReg WReg;
        /// Data offset 4 for the channel programmed into OFFSET4_CH.
        OFFSET4 { 0 12 RRRegField WWRegField }
        OFFSET4_CH { 26 5 RRRegField WWRegField }
        OFFSET4_EN { 31 1 RRRegField WWRegField }
    }

    /// Injected data register 1.
    JDR1 {
        0x80 0x20 0x0000_0000 RReg RoReg;
        JDATA { 0 16 RRRegField RoRRegField }
    }

    /// Injected data register 2.
    JDR2 {
        0x84 0x20 0x0000_0000 RReg RoReg;
        JDATA { 0 16 RRRegField RoRRegField }
    }

    /// Injected data register 3.
    JDR3 {
        0x88 0x20 0x0000_0000 RReg RoReg;
        JDATA { 0 16 RRRegField RoRRegField }
    }

    /// Injected data register 4.
    JDR4 {
        0x8C 0x20 0x0000_0000 RReg RoReg;
        JDATA { 0 16 RRRegField RoRRegField }
    }

    /// Analog watchdog 2 configuration register.
    AWD2CR {
        0xA0 0x20 0x0000_0000 RReg WReg;
        AWD2CH { 0 19 RRRegField WWRegField }
    }

    /// Analog watchdog 3 configuration register.
    AWD3CR {
        0xA4 0x20 0x0000_0000 RReg WReg;
        AWD3CH { 0 19 RRRegField WWRegField }
    }

    /// Differential mode selection register.
    DIFSEL {
        0xB0 0x20 0x0000_0000 RReg WReg;
        DIFSEL { 0 19 RRRegField WWRegField }
    }

    /// Calibration factors.
    CALFACT {
        0xB4 0x20 0x0000_0000 RReg WReg;
        /// Calibration factors in single-ended mode.
        CALFACT_S { 0 7 RRRegField WWRegField }
        /// Calibration factors in differential mode.
        CALFACT_D { 16 7 RRRegField WWRegField }
    }
}
