//! Direct memory access channels.

crate::periph! {
    /// Direct memory access channel.
    pub struct DmaChPeriph;

    /// DMA1 channel 1.
    DMA1_CH1 0x4002_0008;
    /// DMA1 channel 2.
    DMA1_CH2 0x4002_001C;
    /// DMA1 channel 3.
    DMA1_CH3 0x4002_0030;
    /// DMA1 channel 4.
    DMA1_CH4 0x4002_0044;
    /// DMA1 channel 5.
    DMA1_CH5 0x4002_0058;
    /// DMA1 channel 6.
    DMA1_CH6 0x4002_006C;
    /// DMA1 channel 7.
    DMA1_CH7 0x4002_0080;
    /// DMA2 channel 1.
    DMA2_CH1 0x4002_0408;
    /// DMA2 channel 2.
    DMA2_CH2 0x4002_041C;
    /// DMA2 channel 3.
    DMA2_CH3 0x4002_0430;
    /// DMA2 channel 4.
    DMA2_CH4 0x4002_0444;
    /// DMA2 channel 5.
    DMA2_CH5 0x4002_0458;
    /// DMA2 channel 6.
    DMA2_CH6 0x4002_046C;
    /// DMA2 channel 7.
    DMA2_CH7 0x4002_0480;

    /// Channel configuration register.
    CCR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Channel enable.
        EN { 0 1 RRRegField WWRegField }
        /// Transfer complete interrupt enable.
        TCIE { 1 1 RRRegField WWRegField }
        /// Half transfer interrupt enable.
        HTIE { 2 1 RRRegField WWRegField }
        /// Transfer error interrupt enable.
        TEIE { 3 1 RRRegField WWRegField }
        /// Data transfer direction.
        DIR { 4 1 RRRegField WWRegField }
        /// Circular mode.
        CIRC { 5 1 RRRegField WWRegField }
        /// Peripheral increment mode.
        PINC { 6 1 RRRegField WWRegField }
        /// Memory increment mode.
        MINC { 7 1 RRRegField WWRegField }
        /// Peripheral size.
        PSIZE { 8 2 RRRegField WWRegField }
        /// Memory size.
        MSIZE { 10 2 RRRegField WWRegField }
        /// Channel priority level.
        PL { 12 2 RRRegField WWRegField }
        /// Memory to memory mode.
        MEM2MEM { 14 1 RRRegField WWRegField }
    }

    /// Channel number of data to transfer register.
    CNDTR {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Number of data to transfer.
        NDT { 0 16 RRRegField WWRegField }
    }

    /// Channel peripheral address register.
    CPAR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Peripheral address.
        PA { 0 32 RRRegField WWRegField }
    }

    /// Channel memory address register.
    CMAR {
        0x0C 0x20 0x0000_0000 RReg WReg;
        /// Memory address.
        MA { 0 32 RRRegField WWRegField }
    }
}
