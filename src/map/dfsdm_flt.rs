//! Digital filter for sigma delta modulators, filter units.

crate::periph! {
    /// Digital filter for sigma delta modulators, filter unit.
    pub struct DfsdmFltPeriph;

    DFSDM1_FLT0 0x4001_6100;
    DFSDM1_FLT1 0x4001_6180;
    DFSDM1_FLT2 0x4001_6200;
    DFSDM1_FLT3 0x4001_6280;

    /// Control register 1.
    FLTCR1 {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Filter enable.
        DFEN { 0 1 RRRegField WWRegField }
        /// Start a conversion of the injected group.
        JSWSTART { 1 1 RRRegField WWRegField }
        JSYNC { 3 1 RRRegField WWRegField }
        JSCAN { 4 1 RRRegField WWRegField }
        JDMAEN { 5 1 RRRegField WWRegField }
        JEXTSEL { 8 5 RRRegField WWRegField }
        JEXTEN { 13 2 RRRegField WWRegField }
        /// Software start of a conversion on the regular channel.
        RSWSTART { 17 1 RRRegField WWRegField }
        RCONT { 18 1 RRRegField WWRegField }
        RSYNC { 19 1 RRRegField WWRegField }
        RDMAEN { 21 1 RRRegField WWRegField }
        /// Regular channel selection.
        RCH { 24 3 RRRegField WWRegField }
        /// Fast conversion mode selection.
        FAST { 29 1 RRRegField WWRegField }
        AWFSEL { 30 1 RRRegField WWRegField }
    }

    /// Control register 2.
    FLTCR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        JEOCIE { 0 1 RRRegField WWRegField }
        REOCIE { 1 1 RRRegField WWRegField }
        JOVRIE { 2 1 RRRegField WWRegField }
        ROVRIE { 3 1 RRRegField WWRegField }
        AWDIE { 4 1 RRRegField WWRegField }
        SCDIE { 5 1 RRRegField WWRegField }
        CKABIE { 6 1 RRRegField WWRegField }
        /// Extremes detector channel selection.
        EXCH { 8 8 RRRegField WWRegField }
        /// Analog watchdog channel selection.
        AWDCH { 16 8 RRRegField WWRegField }
    }

    /// Interrupt and status register.
    FLTISR {
        0x08 0x20 0x00FF_0000 RReg RoReg;
        JEOCF { 0 1 RRRegField RoRRegField }
        REOCF { 1 1 RRRegField RoRRegField }
        JOVRF { 2 1 RRRegField RoRRegField }
        ROVRF { 3 1 RRRegField RoRRegField }
        AWDF { 4 1 RRRegField RoRRegField }
        JCIP { 13 1 RRRegField RoRRegField }
        RCIP { 14 1 RRRegField RoRRegField }
        /// Clock absence flag.
        CKABF { 16 8 RRRegField RoRRegField }
        /// Short-circuit detector flag.
        SCDF { 24 8 RRRegField RoRRegField }
    }

    /// Interrupt flag clear register.
    FLTICR {
        0x0C 0x20 0x0000_0000 RReg WReg;
        CLRJOVRF { 2 1 RRRegField WWRegField }
        CLRROVRF { 3 1 RRRegField WWRegField }
        CLRCKABF { 16 8 RRRegField WWRegField }
        CLRSCDF { 24 8 RRRegField WWRegField }
    }

    /// Injected channel group selection register.
    FLTJCHGR {
        0x10 0x20 0x0000_0001 RReg WReg;
        JCHG { 0 8 RRRegField WWRegField }
    }

    /// Filter control register.
    FLTFCR {
        0x14 0x20 0x0000_0000 RReg WReg;
        /// Integrator oversampling ratio.
        IOSR { 0 8 RRRegField WWRegField }
        /// Sinc filter oversampling ratio.
        FOSR { 16 10 RRRegField WWRegField }
        /// Sinc filter order.
        FORD { 29 3 RRRegField WWRegField }
    }

    /// Data register for injected group.
    FLTJDATAR {
        0x18 0x20 0x0000_0000 RReg RoReg;
        JDATACH { 0 3 RRRegField RoRRegField }
        /// Injected group conversion data.
        JDATA { 8 24 RRRegField RoRRegField }
    }

    /// Data register for the regular channel.
    FLTRDATAR {
        0x1C 0x20 0x0000_0000 RReg RoReg;
        RDATACH { 0 3 RRRegField RoRRegField }
        RPEND { 4 1 RRRegField RoRRegField }
        /// Regular channel conversion data.
        RDATA { 8 24 RRRegField RoRRegField }
    }

    /// Analog watchdog high threshold register.
    FLTAWHTR {
        0x20 0x20 0x0000_0000 RReg WReg;
        BKAWH { 0 4 RRRegField WWRegField }
        AWHT { 8 24 RRRegField WWRegField }
    }

    /// Analog watchdog low threshold register.
    FLTAWLTR {
        0x24 0x20 0x0000_0000 RReg WReg;
        BKAWL { 0 4 RRRegField WWRegField }
        AWLT { 8 24 RRRegField WWRegField }
    }

    /// Analog watchdog status register.
    FLTAWSR {
        0x28 0x20 0x0000_0000 RReg RoReg;
        AWLTF { 0 8 RRRegField RoRRegField }
        AWHTF { 8 8 RRRegField RoRRegField }
    }

    /// Analog watchdog clear flag register.
    FLTAWCFR {
        0x2C 0x20 0x0000_0000 RReg WReg;
        CLRAWLTF { 0 8 RRRegField WWRegField }
        CLRAWHTF { 8 8 RRRegField WWRegField }
    }

    /// Extremes detector maximum register.
    FLTEXMAX {
        0x30 0x20 0x0000_0000 RReg RoReg;
        EXMAXCH { 0 3 RRRegField RoRRegField }
        EXMAX { 8 24 RRRegField RoRRegField }
    }

    /// Extremes detector minimum register.
    FLTEXMIN {
        0x34 0x20 0x0000_0000 RReg RoReg;
        EXMINCH { 0 3 RRRegField RoRRegField }
        EXMIN { 8 24 RRRegField RoRRegField }
    }

    /// Conversion timer register.
    FLTCNVTIMR {
        0x38 0x20 0x0000_0000 RReg RoReg;
        /// 28-bit timer counting conversion time.
        CNVCNT { 4 28 RRRegField RoRRegField }
    }
}
