crate::periph! {
    /// Analog-to-digital converters common registers.
    pub struct AdcCommonPeriph;

    ADC123_COMMON 0x5004_0300;

    /// Common status register.
    CSR {
        0x00 0x20 0x0000_0000 RReg RoReg;
        ADRDY_MST { 0 1 RRRegField RoRRegField }
        EOSMP_MST { 1 1 RRRegField RoRRegField }
        EOC_MST { 2 1 RRRegField RoRRegField }
        EOS_MST { 3 1 RRRegField RoRRegField }
        OVR_MST { 4 1 RRRegField RoRRegField }
        JEOC_MST { 5 1 RRRegField RoRRegField }
        JEOS_MST { 6 1 RRRegField RoRRegField }
        AWD1_MST { 7 1 RRRegField RoRRegField }
        AWD2_MST { 8 1 RRRegField RoRRegField }
        AWD3_MST { 9 1 RRRegField RoRRegField }
        JQOVF_MST { 10 1 RRRegField RoRRegField }
        ADRDY_SLV { 16 1 RRRegField RoRRegField }
        EOSMP_SLV { 17 1 RRRegField RoRRegField }
        EOC_SLV { 18 1 RRRegField RoRRegField }
        EOS_SLV { 19 1 RRRegField RoRRegField }
        OVR_SLV { 20 1 RRRegField RoRRegField }
        JEOC_SLV { 21 1 RRRegField RoRRegField }
        JEOS_SLV { 22 1 RRRegField RoRRegField }
        AWD1_SLV { 23 1 RRRegField RoRRegField }
        AWD2_SLV { 24 1 RRRegField RoRRegField }
        AWD3_SLV { 25 1 RRRegField RoRRegField }
        JQOVF_SLV { 26 1 RRRegField RoRRegField }
    }

    /// Common control register.
    CCR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Dual ADC mode selection.
        DUAL { 0 5 RRRegField WWRegField }
        /// Delay between 2 sampling phases.
        DELAY { 8 4 RRRegField WWRegField }
        DMACFG { 13 1 RRRegField WWRegField }
        MDMA { 14 2 RRRegField WWRegField }
        /// ADC clock mode.
        CKMODE { 16 2 RRRegField WWRegField }
        /// ADC prescaler.
        PRESC { 18 4 RRRegField WWRegField }
        /// VREFINT enable.
        VREFEN { 22 1 RRRegField WWRegField }
        /// Temperature sensor selection.
        CH17SEL { 23 1 RRRegField WWRegField }
        /// VBAT selection.
        CH18SEL { 24 1 RRRegField WWRegField }
    }

    /// Common regular data register for dual mode.
    CDR {
        0x0C 0x20 0x0000_0000 RReg RoReg;
        RDATA_MST { 0 16 RRRegField RoRRegField }
        RDATA_SLV { 16 16 RRRegField RoRRegField }
    }
}
