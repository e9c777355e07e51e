//! Real-time clock.

crate::periph! {
    /// Real-time clock.
    pub struct RtcPeriph;

    RTC 0x4000_2800;

    /// Time register.
    TR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Second units in BCD format.
        SU { 0 4 RRRegField WWRegField }
        /// Second tens in BCD format.
        ST { 4 3 RRRegField WWRegField }
        /// Minute units in BCD format.
        MNU { 8 4 RRRegField WWRegField }
        /// Minute tens in BCD format.
        MNT { 12 3 RRRegField WWRegField }
        /// Hour units in BCD format.
        HU { 16 4 RRRegField WWRegField }
        /// Hour tens in BCD format.
        HT { 20 2 RRRegField WWRegField }
        /// AM/PM notation.
        PM { 22 1 RRRegField WWRegField }
    }

    /// Date register.
    DR {
        0x04 0x20 0x0000_2101 RReg WReg;
        /// Date units in BCD format.
        DU { 0 4 RRRegField WWRegField }
        /// Date tens in BCD format.
        DT { 4 2 RRRegField WWRegField }
        /// Month units in BCD format.
        MU { 8 4 RRRegField WWRegField }
        /// Month tens in BCD format.
        MT { 12 1 RRRegField WWRegField }
        /// Week day units.
        WDU { 13 3 RRRegField WWRegField }
        /// Year units in BCD format.
        YU { 16 4 RRRegField WWRegField }
        /// Year tens in BCD format.
        YT { 20 4 RRRegField WWRegField }
    }

    /// Control register.
    CR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Wakeup clock selection.
        WUCKSEL { 0 3 RRRegField WWRegField }
        TSEDGE { 3 1 RRRegField WWRegField }
        REFCKON { 4 1 RRRegField WWRegField }
        /// Bypass the shadow registers.
        BYPSHAD { 5 1 RRRegField WWRegField }
        /// Hour format.
        FMT { 6 1 RRRegField WWRegField }
        /// Alarm A enable.
        ALRAE { 8 1 RRRegField WWRegField }
        /// Alarm B enable.
        ALRBE { 9 1 RRRegField WWRegField }
        /// Wakeup timer enable.
        WUTE { 10 1 RRRegField WWRegField }
        /// Timestamp enable.
        TSE { 11 1 RRRegField WWRegField }
        ALRAIE { 12 1 RRRegField WWRegField }
        ALRBIE { 13 1 RRRegField WWRegField }
        WUTIE { 14 1 RRRegField WWRegField }
        TSIE { 15 1 RRRegField WWRegField }
        /// Add 1 hour (summer time change).
        ADD1H { 16 1 RRRegField WWRegField }
        /// Subtract 1 hour (winter time change).
        SUB1H { 17 1 RRRegField WWRegField }
        BKP { 18 1 RRRegField WWRegField }
        COSEL { 19 1 RRRegField WWRegField }
        POL { 20 1 RRRegField WWRegField }
        OSEL { 21 2 RRRegField WWRegField }
        COE { 23 1 RRRegField WWRegField }
        ITSE { 24 1 RRRegField WWRegField }
    }

    /// Initialization and status register.
    ISR {
        0x0C 0x20 0x0000_0007 RReg WReg;
        ALRAWF { 0 1 RRRegField RoRRegField }
        ALRBWF { 1 1 RRRegField RoRRegField }
        WUTWF { 2 1 RRRegField RoRRegField }
        SHPF { 3 1 RRRegField RoRRegField }
        /// Initialization status flag.
        INITS { 4 1 RRRegField RoRRegField }
        /// Registers synchronization flag.
        RSF { 5 1 RRRegField WWRegField }
        /// Initialization flag.
        INITF { 6 1 RRRegField RoRRegField }
        /// Initialization mode.
        INIT { 7 1 RRRegField WWRegField }
        ALRAF { 8 1 RRRegField WWRegField }
        ALRBF { 9 1 RRRegField WWRegField }
        WUTF { 10 1 RRRegField WWRegField }
        TSF { 11 1 RRRegField WWRegField }
        TSOVF { 12 1 RRRegField WWRegField }
        TAMP1F { 13 1 RRRegField WWRegField }
        TAMP2F { 14 1 RRRegField WWRegField }
        TAMP3F { 15 1 RRRegField WWRegField }
        RECALPF { 16 1 RRRegField RoRRegField }
        ITSF { 17 1 RRRegField WWRegField }
    }

    /// Prescaler register.
    PRER {
        0x10 0x20 0x007F_00FF RReg WReg;
        /// Synchronous prescaler factor.
        PREDIV_S { 0 15 RRRegField WWRegField }
        /// Asynchronous prescaler factor.
        PREDIV_A { 16 7 RRRegField WWRegField }
    }

    /// Wakeup timer register.
    WUTR {
        0x14 0x20 0x0000_FFFF RReg WReg;
        /// Wakeup auto-reload value bits.
        WUT { 0 16 RRRegField WWRegField }
    }

    /// Alarm A register.
    ALRMAR {
        0x1C 0x20 0x0000_0000 RReg WReg;
        SU { 0 4 RRRegField WWRegField }
        ST { 4 3 RRRegField WWRegField }
        /// Alarm A seconds mask.
        MSK1 { 7 1 RRRegField WWRegField }
        MNU { 8 4 RRRegField WWRegField }
        MNT { 12 3 RRRegField WWRegField }
        /// Alarm A minutes mask.
        MSK2 { 15 1 RRRegField WWRegField }
        HU { 16 4 RRRegField WWRegField }
        HT { 20 2 RRRegField WWRegField }
        PM { 22 1 RRRegField WWRegField }
        /// Alarm A hours mask.
        MSK3 { 23 1 RRRegField WWRegField }
        DU { 24 4 RRRegField WWRegField }
        DT { 28 2 RRRegField WWRegField }
        /// Week day selection.
        WDSEL { 30 1 RRRegField WWRegField }
        /// Alarm A date mask.
        MSK4 { 31 1 RRRegField WWRegField }
    }

    /// Alarm B register.
    ALRMBR {
        0x20 0x20 0x0000_0000 RReg WReg;
        SU { 0 4 RRRegField WWRegField }
        ST { 4 3 RRRegField WWRegField }
        /// Alarm B seconds mask.
        MSK1 { 7 1 RRRegField WWRegField }
        MNU { 8 4 RRRegField WWRegField }
        MNT { 12 3 RRRegField WWRegField }
        /// Alarm B minutes mask.
        MSK2 { 15 1 RRRegField WWRegField }
        HU { 16 4 RRRegField WWRegField }
        HT { 20 2 RRRegField WWRegField }
        PM { 22 1 RRRegField WWRegField }
        /// Alarm B hours mask.
        MSK3 { 23 1 RRRegField WWRegField }
        DU { 24 4 RRRegField WWRegField }
        DT { 28 2 RRRegField WWRegField }
        /// Week day selection.
        WDSEL { 30 1 RRRegField WWRegField }
        /// Alarm B date mask.
        MSK4 { 31 1 RRRegField WWRegField }
    }

    /// Write protection register.
    WPR {
        0x24 0x20 0x0000_0000 WReg WoReg;
        /// Write protection key.
        KEY { 0 8 WWRegField WoWRegField }
    }

    /// Sub second register.
    SSR {
        0x28 0x20 0x0000_0000 RReg RoReg;
        /// Sub second value.
        SS { 0 16 RRRegField RoRRegField }
    }

    /// Shift control register.
    SHIFTR {
        0x2C 0x20 0x0000_0000 WReg WoReg;
        /// Subtract a fraction of a second.
        SUBFS { 0 15 WWRegField WoWRegField }
        /// Add one second.
        ADD1S { 31 1 WWRegField WoWRegField }
    }

    /// Timestamp time register.
    TSTR {
        0x30 0x20 0x0000_0000 RReg RoReg;
        /// Second units in BCD format.
        SU { 0 4 RRRegField RoRRegField }
        /// Second tens in BCD format.
        ST { 4 3 RRRegField RoRRegField }
        /// Minute units in BCD format.
        MNU { 8 4 RRRegField RoRRegField }
        /// Minute tens in BCD format.
        MNT { 12 3 RRRegField RoRRegField }
        /// Hour units in BCD format.
        HU { 16 4 RRRegField RoRRegField }
        /// Hour tens in BCD format.
        HT { 20 2 RRRegField RoRRegField }
        /// AM/PM notation.
        PM { 22 1 RRRegField RoRRegField }
    }

    /// Timestamp date register.
    TSDR {
        0x34 0x20 0x0000_0000 RReg RoReg;
        /// Date units in BCD format.
        DU { 0 4 RRRegField RoRRegField }
        /// Date tens in BCD format.
        DT { 4 2 RRRegField RoRRegField }
        /// Month units in BCD format.
        MU { 8 4 RRRegField RoRRegField }
        /// Month tens in BCD format.
        MT { 12 1 RRRegField RoRRegField }
        /// Week day units.
        WDU { 13 3 RRRegField RoRRegField }
    }

    /// Timestamp sub second register.
    TSSSR {
        0x38 0x20 0x0000_0000 RReg RoReg;
        SS { 0 16 RRRegField RoRRegField }
    }

    /// Calibration register.
    CALR {
        0x3C 0x20 0x0000_0000 RReg WReg;
        /// Calibration minus.
        CALM { 0 9 RRRegField WWRegField }
        CALW16 { 13 1 RRRegField WWRegField }
        CALW8 { 14 1 RRRegField WWRegField }
        /// Increase frequency of RTC by 488.5 ppm.
        CALP { 15 1 RRRegField WWRegField }
    }

    /// Tamper configuration register.
    TAMPCR {
        0x40 0x20 0x0000_0000 RReg WReg;
        TAMP1E { 0 1 RRRegField WWRegField }
        TAMP1TRG { 1 1 RRRegField WWRegField }
        TAMPIE { 2 1 RRRegField WWRegField }
        TAMP2E { 3 1 RRRegField WWRegField }
        TAMP2TRG { 4 1 RRRegField WWRegField }
        TAMP3E { 5 1 RRRegField WWRegField }
        TAMP3TRG { 6 1 RRRegField WWRegField }
        TAMPTS { 7 1 RRRegField WWRegField }
        TAMPFREQ { 8 3 RRRegField WWRegField }
        TAMPFLT { 11 2 RRRegField WWRegField }
        TAMPPRCH { 13 2 RRRegField WWRegField }
        TAMPPUDIS { 15 1 RRRegField WWRegField }
        TAMP1IE { 16 1 RRRegField WWRegField }
        TAMP1NOERASE { 17 1 RRRegField WWRegField }
        TAMP1MF { 18 1 RRRegField WWRegField }
        TAMP2IE { 19 1 RRRegField WWRegField }
        TAMP2NOERASE { 20 1 RRRegField WWRegField }
        TAMP2MF { 21 1 RRRegField WWRegField }
        TAMP3IE { 22 1 RRRegField WWRegField }
        TAMP3NOERASE { 23 1 RRRegField WWRegField }
        TAMP3MF { 24 1 RRRegField WWRegField }
    }

    /// Alarm A sub second register.
    ALRMASSR {
        0x44 0x20 0x0000_0000 RReg WReg;
        SS { 0 15 RRRegField WWRegField }
        MASKSS { 24 4 RRRegField WWRegField }
    }

    /// Alarm B sub second register.
    ALRMBSSR {
        0x48 0x20 0x0000_0000 RReg WReg;
        SS { 0 15 RRRegField WWRegField }
        MASKSS { 24 4 RRRegField WWRegField }
    }

    /// Option register.
    OR {
        0x4C 0x20 0x0000_0000 RReg WReg;
        RTC_ALARM_TYPE { 0 1 RRRegField WWRegField }
        RTC_OUT_RMP { 1 1 RRRegField WWRegField }
    }

    /// Backup register 0.
    BKP0R {
        0x50 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 1.
    BKP1R {
        0x54 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 2.
    BKP2R {
        0x58 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 3.
    BKP3R {
        0x5C 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 4.
    BKP4R {
        0x60 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 5.
    BKP5R {
        0x64 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 6.
    BKP6R {
        0x68 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 7.
    BKP7R {
        0x6C 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 8.
    BKP8R {
        0x70 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 9.
    BKP9R {
        0x74 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 10.
    BKP10R {
        0x78 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 11.
    BKP11R {
        0x7C 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 12.
    BKP12R {
        0x80 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 13.
    BKP13R {
        0x84 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 14.
    BKP14R {
        0x88 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 15.
    BKP15R {
        0x8C 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 16.
    BKP16R {
        0x90 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 17.
    BKP17R {
        0x94 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 18.
    BKP18R {
        0x98 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 19.
    BKP19R {
        0x9C 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 20.
    BKP20R {
        0xA0 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 21.
    BKP21R {
        0xA4 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 22.
    BKP22R {
        0xA8 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 23.
    BKP23R {
        0xAC 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 24.
    BKP24R {
        0xB0 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 25.
    BKP25R {
        0xB4 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 26.
    BKP26R {
        0xB8 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 27.
    BKP27R {
        0xBC 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 28.
    BKP28R {
        0xC0 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 29.
    BKP29R {
        0xC4 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 30.
    BKP30R {
        0xC8 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }

    /// Backup register 31.
    BKP31R {
        0xCC 0x20 0x0000_0000 RReg WReg;
        BKP { 0 32 RRRegField WWRegField }
    }
}
