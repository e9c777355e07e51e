//! Cortex-M4 core registers used by the crate itself.
//!
//! Only the instrumentation trace macrocell, the interrupt control state and
//! vector table offset registers of the system control block, and the debug
//! exception and monitor control register are described. These registers
//! live on the private peripheral bus and have a single instance each.

crate::reg! {
    /// ITM stimulus port 0 register.
    ///
    /// Ports 1 to 31 follow at a 4-byte stride.
    pub mod ITM STIM0;
    0xE000_0000 0x20 0x0000_0000 RReg WReg;
    /// FIFO ready to accept a write.
    FIFOREADY { 0 1 RRRegField RoRRegField }
}

crate::reg! {
    /// ITM trace enable register.
    pub mod ITM TER;
    0xE000_0E00 0x20 0x0000_0000 RReg WReg;
    /// Stimulus port enable bits, one per port.
    STIMENA { 0 32 RRRegField WWRegField }
}

crate::reg! {
    /// ITM trace privilege register.
    pub mod ITM TPR;
    0xE000_0E40 0x20 0x0000_0000 RReg WReg;
    /// Unprivileged access mask, one bit per group of 8 ports.
    PRIVMASK { 0 4 RRRegField WWRegField }
}

crate::reg! {
    /// ITM trace control register.
    pub mod ITM TCR;
    0xE000_0E80 0x20 0x0000_0000 RReg WReg;
    /// Enables the ITM.
    ITMENA { 0 1 RRRegField WWRegField }
    /// Enables local timestamp generation.
    TSENA { 1 1 RRRegField WWRegField }
    /// Enables synchronization packet transmission.
    SYNCENA { 2 1 RRRegField WWRegField }
    /// Enables forwarding of hardware event packets.
    TXENA { 3 1 RRRegField WWRegField }
    /// Enables asynchronous clocking of the timestamp counter.
    SWOENA { 4 1 RRRegField WWRegField }
    /// Local timestamp prescaler.
    TSPRESCALE { 8 2 RRRegField WWRegField }
    /// Global timestamp frequency.
    GTSFREQ { 10 2 RRRegField WWRegField }
    /// Identifier for multi-source trace stream formatting.
    TRACEBUSID { 16 7 RRRegField WWRegField }
    /// ITM is processing events.
    BUSY { 23 1 RRRegField RoRRegField }
}

crate::reg! {
    /// ITM lock access register.
    pub mod ITM LAR;
    0xE000_0FB0 0x20 0x0000_0000 WReg WoReg;
    /// Writing `0xC5AC_CE55` unlocks write access to the ITM.
    KEY { 0 32 WWRegField WoWRegField }
}

crate::reg! {
    /// Interrupt control and state register.
    pub mod SCB ICSR;
    0xE000_ED04 0x20 0x0000_0000 RReg WReg;
    /// Exception number of the active exception.
    VECTACTIVE { 0 9 RRRegField RoRRegField }
    /// No preempted active exceptions.
    RETTOBASE { 11 1 RRRegField RoRRegField }
    /// Exception number of the highest priority pending exception.
    VECTPENDING { 12 7 RRRegField RoRRegField }
    /// An interrupt is pending.
    ISRPENDING { 22 1 RRRegField RoRRegField }
    /// Removes the pending state from the SysTick exception.
    PENDSTCLR { 25 1 WWRegField WoWRegField }
    /// SysTick exception set-pending.
    PENDSTSET { 26 1 RRRegField WWRegField }
    /// Removes the pending state from the PendSV exception.
    PENDSVCLR { 27 1 WWRegField WoWRegField }
    /// PendSV set-pending.
    PENDSVSET { 28 1 RRRegField WWRegField }
    /// NMI set-pending.
    NMIPENDSET { 31 1 RRRegField WWRegField }
}

crate::reg! {
    /// Vector table offset register.
    pub mod SCB VTOR;
    0xE000_ED08 0x20 0x0000_0000 RReg WReg;
    /// Vector table base offset.
    TBLOFF { 9 23 RRRegField WWRegField }
}

crate::reg! {
    /// Debug exception and monitor control register.
    pub mod DCB DEMCR;
    0xE000_EDFC 0x20 0x0000_0000 RReg WReg;
    /// Halting debug trap on reset.
    VC_CORERESET { 0 1 RRRegField WWRegField }
    /// Halting debug trap on a memory management fault.
    VC_MMERR { 4 1 RRRegField WWRegField }
    VC_NOCPERR { 5 1 RRRegField WWRegField }
    VC_CHKERR { 6 1 RRRegField WWRegField }
    VC_STATERR { 7 1 RRRegField WWRegField }
    VC_BUSERR { 8 1 RRRegField WWRegField }
    VC_INTERR { 9 1 RRRegField WWRegField }
    VC_HARDERR { 10 1 RRRegField WWRegField }
    /// Enables the debug monitor exception.
    MON_EN { 16 1 RRRegField WWRegField }
    /// Sets or clears the pending state of the debug monitor exception.
    MON_PEND { 17 1 RRRegField WWRegField }
    /// Steps the processor when the debug monitor exception returns.
    MON_STEP { 18 1 RRRegField WWRegField }
    /// Debug monitor semaphore.
    MON_REQ { 19 1 RRRegField WWRegField }
    /// Global enable for the DWT and ITM.
    TRCENA { 24 1 RRRegField WWRegField }
}
