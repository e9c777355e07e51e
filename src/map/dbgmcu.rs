//! Debug support.
//!
//! The registers are accessible through the private peripheral bus.

crate::periph! {
    /// Debug support.
    pub struct DbgmcuPeriph;

    DBGMCU 0xE004_2000;

    /// MCU device ID code.
    IDCODE {
        0x00 0x20 0x0000_0000 RReg RoReg;
        /// Device identifier.
        DEV_ID { 0 12 RRRegField RoRRegField }
        /// Revision identifier.
        REV_ID { 16 16 RRRegField RoRRegField }
    }

    /// Debug MCU configuration register.
    CR {
        0x04 0x20 0x0000_0000 RReg WReg;
        DBG_SLEEP { 0 1 RRRegField WWRegField }
        DBG_STOP { 1 1 RRRegField WWRegField }
        DBG_STANDBY { 2 1 RRRegField WWRegField }
        TRACE_IOEN { 5 1 RRRegField WWRegField }
        TRACE_MODE { 6 2 RRRegField WWRegField }
    }

    /// Debug MCU APB1 freeze register 1.
    APB1FZR1 {
        0x08 0x20 0x0000_0000 RReg WReg;
        DBG_TIM2_STOP { 0 1 RRRegField WWRegField }
        DBG_TIM3_STOP { 1 1 RRRegField WWRegField }
        DBG_TIM4_STOP { 2 1 RRRegField WWRegField }
        DBG_TIM5_STOP { 3 1 RRRegField WWRegField }
        DBG_TIM6_STOP { 4 1 RRRegField WWRegField }
        DBG_TIM7_STOP { 5 1 RRRegField WWRegField }
        DBG_RTC_STOP { 10 1 RRRegField WWRegField }
        DBG_WWDG_STOP { 11 1 RRRegField WWRegField }
        DBG_IWDG_STOP { 12 1 RRRegField WWRegField }
        DBG_I2C1_STOP { 21 1 RRRegField WWRegField }
        DBG_I2C2_STOP { 22 1 RRRegField WWRegField }
        DBG_I2C3_STOP { 23 1 RRRegField WWRegField }
        DBG_CAN_STOP { 25 1 RRRegField WWRegField }
        DBG_CAN2_STOP { 26 1 RRRegField WWRegField }
        DBG_LPTIM1_STOP { 31 1 RRRegField WWRegField }
    }

    /// Debug MCU APB1 freeze register 2.
    APB1FZR2 {
        0x0C 0x20 0x0000_0000 RReg WReg;
        DBG_I2C4_STOP { 1 1 RRRegField WWRegField }
        DBG_LPTIM2_STOP { 5 1 RRRegField WWRegField }
    }

    /// Debug MCU APB2 freeze register.
    APB2FZR {
        0x10 0x20 0x0000_0000 RReg WReg;
        DBG_TIM1_STOP { 11 1 RRRegField WWRegField }
        DBG_TIM8_STOP { 13 1 RRRegField WWRegField }
        DBG_TIM15_STOP { 16 1 RRRegField WWRegField }
        DBG_TIM16_STOP { 17 1 RRRegField WWRegField }
        DBG_TIM17_STOP { 18 1 RRRegField WWRegField }
    }
}
