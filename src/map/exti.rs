crate::periph! {
    /// Extended interrupts and events controller.
    pub struct ExtiPeriph;

    EXTI 0x4001_0400;

    /// Interrupt mask register 1.
    IMR1 {
        0x00 0x20 0xFF82_0000 RReg WReg;
        /// Interrupt mask on line 0.
        IM0 { 0 1 RRRegField WWRegField }
        /// Interrupt mask on line 1.
        IM1 { 1 1 RRRegField WWRegField }
        /// Interrupt mask on line 2.
        IM2 { 2 1 RRRegField WWRegField }
        /// Interrupt mask on line 3.
        IM3 { 3 1 RRRegField WWRegField }
        /// Interrupt mask on line 4.
        IM4 { 4 1 RRRegField WWRegField }
        /// Interrupt mask on line 5.
        IM5 { 5 1 RRRegField WWRegField }
        /// Interrupt mask on line 6.
        IM6 { 6 1 RRRegField WWRegField }
        /// Interrupt mask on line 7.
        IM7 { 7 1 RRRegField WWRegField }
        /// Interrupt mask on line 8.
        IM8 { 8 1 RRRegField WWRegField }
        /// Interrupt mask on line 9.
        IM9 { 9 1 RRRegField WWRegField }
        /// Interrupt mask on line 10.
        IM10 { 10 1 RRRegField WWRegField }
        /// Interrupt mask on line 11.
        IM11 { 11 1 RRRegField WWRegField }
        /// Interrupt mask on line 12.
        IM12 { 12 1 RRRegField WWRegField }
        /// Interrupt mask on line 13.
        IM13 { 13 1 RRRegField WWRegField }
        /// Interrupt mask on line 14.
        IM14 { 14 1 RRRegField WWRegField }
        /// Interrupt mask on line 15.
        IM15 { 15 1 RRRegField WWRegField }
        /// Interrupt mask on line 16.
        IM16 { 16 1 RRRegField WWRegField }
        /// Interrupt mask on line 17.
        IM17 { 17 1 RRRegField WWRegField }
        /// Interrupt mask on line 18.
        IM18 { 18 1 RRRegField WWRegField }
        /// Interrupt mask on line 19.
        IM19 { 19 1 RRRegField WWRegField }
        /// Interrupt mask on line 20.
        IM20 { 20 1 RRRegField WWRegField }
        /// Interrupt mask on line 21.
        IM21 { 21 1 RRRegField WWRegField }
        /// Interrupt mask on line 22.
        IM22 { 22 1 RRRegField WWRegField }
        /// Interrupt mask on line 23.
        IM23 { 23 1 RRRegField WWRegField }
        /// Interrupt mask on line 24.
        IM24 { 24 1 RRRegField WWRegField }
        /// Interrupt mask on line 25.
        IM25 { 25 1 RRRegField WWRegField }
        /// Interrupt mask on line 26.
        IM26 { 26 1 RRRegField WWRegField }
        /// Interrupt mask on line 27.
        IM27 { 27 1 RRRegField WWRegField }
        /// Interrupt mask on line 28.
        IM28 { 28 1 RRRegField WWRegField }
        /// Interrupt mask on line 29.
        IM29 { 29 1 RRRegField WWRegField }
        /// Interrupt mask on line 30.
        IM30 { 30 1 RRRegField WWRegField }
        /// Interrupt mask on line 31.
        IM31 { 31 1 RRRegField WWRegField }
    }

    /// Event mask register 1.
    EMR1 {
        0x04 0x20 0x0000_0000 RReg WReg;
        EM0 { 0 1 RRRegField WWRegField }
        EM1 { 1 1 RRRegField WWRegField }
        EM2 { 2 1 RRRegField WWRegField }
        EM3 { 3 1 RRRegField WWRegField }
        EM4 { 4 1 RRRegField WWRegField }
        EM5 { 5 1 RRRegField WWRegField }
        EM6 { 6 1 RRRegField WWRegField }
        EM7 { 7 1 RRRegField WWRegField }
        EM8 { 8 1 RRRegField WWRegField }
        EM9 { 9 1 RRRegField WWRegField }
        EM10 { 10 1 RRRegField WWRegField }
        EM11 { 11 1 RRRegField WWRegField }
        EM12 { 12 1 RRRegField WWRegField }
        EM13 { 13 1 RRRegField WWRegField }
        EM14 { 14 1 RRRegField WWRegField }
        EM15 { 15 1 RRRegField WWRegField }
        EM16 { 16 1 RRRegField WWRegField }
        EM17 { 17 1 RRRegField WWRegField }
        EM18 { 18 1 RRRegField WWRegField }
        EM19 { 19 1 RRRegField WWRegField }
        EM20 { 20 1 RRRegField WWRegField }
        EM21 { 21 1 RRRegField WWRegField }
        EM22 { 22 1 RRRegField WWRegField }
        EM23 { 23 1 RRRegField WWRegField }
        EM24 { 24 1 RRRegField WWRegField }
        EM25 { 25 1 RRRegField WWRegField }
        EM26 { 26 1 RRRegField WWRegField }
        EM27 { 27 1 RRRegField WWRegField }
        EM28 { 28 1 RRRegField WWRegField }
        EM29 { 29 1 RRRegField WWRegField }
        EM30 { 30 1 RRRegField WWRegField }
        EM31 { 31 1 RRRegField WWRegField }
    }

    /// Rising trigger selection register 1.
    RTSR1 {
        0x08 0x20 0x0000_0000 RReg WReg;
        RT0 { 0 1 RRRegField WWRegField }
        RT1 { 1 1 RRRegField WWRegField }
        RT2 { 2 1 RRRegField WWRegField }
        RT3 { 3 1 RRRegField WWRegField }
        RT4 { 4 1 RRRegField WWRegField }
        RT5 { 5 1 RRRegField WWRegField }
        RT6 { 6 1 RRRegField WWRegField }
        RT7 { 7 1 RRRegField WWRegField }
        RT8 { 8 1 RRRegField WWRegField }
        RT9 { 9 1 RRRegField WWRegField }
        RT10 { 10 1 RRRegField WWRegField }
        RT11 { 11 1 RRRegField WWRegField }
        RT12 { 12 1 RRRegField WWRegField }
        RT13 { 13 1 RRRegField WWRegField }
        RT14 { 14 1 RRRegField WWRegField }
        RT15 { 15 1 RRRegField WWRegField }
        RT16 { 16 1 RRRegField WWRegField }
        RT18 { 18 1 RRRegField WWRegField }
        RT19 { 19 1 RRRegField WWRegField }
        RT20 { 20 1 RRRegField WWRegField }
        RT21 { 21 1 RRRegField WWRegField }
        RT22 { 22 1 RRRegField WWRegField }
    }

    /// Falling trigger selection register 1.
    FTSR1 {
        0x0C 0x20 0x0000_0000 RReg WReg;
        FT0 { 0 1 RRRegField WWRegField }
        FT1 { 1 1 RRRegField WWRegField }
        FT2 { 2 1 RRRegField WWRegField }
        FT3 { 3 1 RRRegField WWRegField }
        FT4 { 4 1 RRRegField WWRegField }
        FT5 { 5 1 RRRegField WWRegField }
        FT6 { 6 1 RRRegField WWRegField }
        FT7 { 7 1 RRRegField WWRegField }
        FT8 { 8 1 RRRegField WWRegField }
        FT9 { 9 1 RRRegField WWRegField }
        FT10 { 10 1 RRRegField WWRegField }
        FT11 { 11 1 RRRegField WWRegField }
        FT12 { 12 1 RRRegField WWRegField }
        FT13 { 13 1 RRRegField WWRegField }
        FT14 { 14 1 RRRegField WWRegField }
        FT15 { 15 1 RRRegField WWRegField }
        FT16 { 16 1 RRRegField WWRegField }
        FT18 { 18 1 RRRegField WWRegField }
        FT19 { 19 1 RRRegField WWRegField }
        FT20 { 20 1 RRRegField WWRegField }
        FT21 { 21 1 RRRegField WWRegField }
        FT22 { 22 1 RRRegField WWRegField }
    }

    /// Software interrupt event register 1.
    SWIER1 {
        0x10 0x20 0x0000_0000 RReg WReg;
        SWI0 { 0 1 RRRegField WWRegField }
        SWI1 { 1 1 RRRegField WWRegField }
        SWI2 { 2 1 RRRegField WWRegField }
        SWI3 { 3 1 RRRegField WWRegField }
        SWI4 { 4 1 RRRegField WWRegField }
        SWI5 { 5 1 RRRegField WWRegField }
        SWI6 { 6 1 RRRegField WWRegField }
        SWI7 { 7 1 RRRegField WWRegField }
        SWI8 { 8 1 RRRegField WWRegField }
        SWI9 { 9 1 RRRegField WWRegField }
        SWI10 { 10 1 RRRegField WWRegField }
        SWI11 { 11 1 RRRegField WWRegField }
        SWI12 { 12 1 RRRegField WWRegField }
        SWI13 { 13 1 RRRegField WWRegField }
        SWI14 { 14 1 RRRegField WWRegField }
        SWI15 { 15 1 RRRegField WWRegField }
        SWI16 { 16 1 RRRegField WWRegField }
        SWI18 { 18 1 RRRegField WWRegField }
        SWI19 { 19 1 RRRegField WWRegField }
        SWI20 { 20 1 RRRegField WWRegField }
        SWI21 { 21 1 RRRegField WWRegField }
        SWI22 { 22 1 RRRegField WWRegField }
    }

    /// Pending register 1.
    PR1 {
        0x14 0x20 0x0000_0000 RReg WReg;
        PIF0 { 0 1 RRRegField WWRegField }
        PIF1 { 1 1 RRRegField WWRegField }
        PIF2 { 2 1 RRRegField WWRegField }
        PIF3 { 3 1 RRRegField WWRegField }
        PIF4 { 4 1 RRRegField WWRegField }
        PIF5 { 5 1 RRRegField WWRegField }
        PIF6 { 6 1 RRRegField WWRegField }
        PIF7 { 7 1 RRRegField WWRegField }
        PIF8 { 8 1 RRRegField WWRegField }
        PIF9 { 9 1 RRRegField WWRegField }
        PIF10 { 10 1 RRRegField WWRegField }
        PIF11 { 11 1 RRRegField WWRegField }
        PIF12 { 12 1 RRRegField WWRegField }
        PIF13 { 13 1 RRRegField WWRegField }
        PIF14 { 14 1 RRRegField WWRegField }
        PIF15 { 15 1 RRRegField WWRegField }
        PIF16 { 16 1 RRRegField WWRegField }
        PIF18 { 18 1 RRRegField WWRegField }
        PIF19 { 19 1 RRRegField WWRegField }
        PIF20 { 20 1 RRRegField WWRegField }
        PIF21 { 21 1 RRRegField WWRegField }
        PIF22 { 22 1 RRRegField WWRegField }
    }

    /// Interrupt mask register 2.
    IMR2 {
        0x20 0x20 0x0000_0087 RReg WReg;
        IM32 { 0 1 RRRegField WWRegField }
        IM33 { 1 1 RRRegField WWRegField }
        IM34 { 2 1 RRRegField WWRegField }
        IM35 { 3 1 RRRegField WWRegField }
        IM36 { 4 1 RRRegField WWRegField }
        IM37 { 5 1 RRRegField WWRegField }
        IM38 { 6 1 RRRegField WWRegField }
        IM39 { 7 1 RRRegField WWRegField }
        IM40 { 8 1 RRRegField WWRegField }
    }

    /// Event mask register 2.
    EMR2 {
        0x24 0x20 0x0000_0000 RReg WReg;
        EM32 { 0 1 RRRegField WWRegField }
        EM33 { 1 1 RRRegField WWRegField }
        EM34 { 2 1 RRRegField WWRegField }
        EM35 { 3 1 RRRegField WWRegField }
        EM36 { 4 1 RRRegField WWRegField }
        EM37 { 5 1 RRRegField WWRegField }
        EM38 { 6 1 RRRegField WWRegField }
        EM39 { 7 1 RRRegField WWRegField }
        EM40 { 8 1 RRRegField WWRegField }
    }

    /// Rising trigger selection register 2.
    RTSR2 {
        0x28 0x20 0x0000_0000 RReg WReg;
        RT35 { 3 1 RRRegField WWRegField }
        RT36 { 4 1 RRRegField WWRegField }
        RT37 { 5 1 RRRegField WWRegField }
        RT38 { 6 1 RRRegField WWRegField }
    }

    /// Falling trigger selection register 2.
    FTSR2 {
        0x2C 0x20 0x0000_0000 RReg WReg;
        FT35 { 3 1 RRRegField WWRegField }
        FT36 { 4 1 RRRegField WWRegField }
        FT37 { 5 1 RRRegField WWRegField }
        FT38 { 6 1 RRRegField WWRegField }
    }

    /// Software interrupt event register 2.
    SWIER2 {
        0x30 0x20 0x0000_0000 RReg WReg;
        SWI35 { 3 1 RRRegField WWRegField }
        SWI36 { 4 1 RRRegField WWRegField }
        SWI37 { 5 1 RRRegField WWRegField }
        SWI38 { 6 1 RRRegField WWRegField }
    }

    /// Pending register 2.
    PR2 {
        0x34 0x20 0x0000_0000 RReg WReg;
        PIF35 { 3 1 RRRegField WWRegField }
        PIF36 { 4 1 RRRegField WWRegField }
        PIF37 { 5 1 RRRegField WWRegField }
        PIF38 { 6 1 RRRegField WWRegField }
    }
}
