//! Direct memory access controllers.
//!
//! Channel registers are declared separately in [`dma_ch`](super::dma_ch).

crate::periph! {
    /// Direct memory access controller.
    pub struct DmaPeriph;

    DMA1 0x4002_0000;
    DMA2 0x4002_0400;

    /// Interrupt status register.
    ISR {
        0x00 0x20 0x0000_0000 RReg RoReg;
        GIF1 { 0 1 RRRegField RoRRegField }
        TCIF1 { 1 1 RRRegField RoRRegField }
        HTIF1 { 2 1 RRRegField RoRRegField }
        TEIF1 { 3 1 RRRegField RoRRegField }
        GIF2 { 4 1 RRRegField RoRRegField }
        TCIF2 { 5 1 RRRegField RoRRegField }
        HTIF2 { 6 1 RRRegField RoRRegField }
        TEIF2 { 7 1 RRRegField RoRRegField }
        GIF3 { 8 1 RRRegField RoRRegField }
        TCIF3 { 9 1 RRRegField RoRRegField }
        HTIF3 { 10 1 RRRegField RoRRegField }
        TEIF3 { 11 1 RRRegField RoRRegField }
        GIF4 { 12 1 RRRegField RoRRegField }
        TCIF4 { 13 1 RRRegField RoRRegField }
        HTIF4 { 14 1 RRRegField RoRRegField }
        TEIF4 { 15 1 RRRegField RoRRegField }
        GIF5 { 16 1 RRRegField RoRRegField }
        TCIF5 { 17 1 RRRegField RoRRegField }
        HTIF5 { 18 1 RRRegField RoRRegField }
        TEIF5 { 19 1 RRRegField RoRRegField }
        GIF6 { 20 1 RRRegField RoRRegField }
        TCIF6 { 21 1 RRRegField RoRRegField }
        HTIF6 { 22 1 RRRegField RoRRegField }
        TEIF6 { 23 1 RRRegField RoRRegField }
        GIF7 { 24 1 RRRegField RoRRegField }
        TCIF7 { 25 1 RRRegField RoRRegField }
        HTIF7 { 26 1 RRRegField RoRRegField }
        TEIF7 { 27 1 RRRegField RoRRegField }
    }

    /// Interrupt flag clear register.
    IFCR {
        0x04 0x20 0x0000_0000 WReg WoReg;
        CGIF1 { 0 1 WWRegField WoWRegField }
        CTCIF1 { 1 1 WWRegField WoWRegField }
        CHTIF1 { 2 1 WWRegField WoWRegField }
        CTEIF1 { 3 1 WWRegField WoWRegField }
        CGIF2 { 4 1 WWRegField WoWRegField }
        CTCIF2 { 5 1 WWRegField WoWRegField }
        CHTIF2 { 6 1 WWRegField WoWRegField }
        CTEIF2 { 7 1 WWRegField WoWRegField }
        CGIF3 { 8 1 WWRegField WoWRegField }
        CTCIF3 { 9 1 WWRegField WoWRegField }
        CHTIF3 { 10 1 WWRegField WoWRegField }
        CTEIF3 { 11 1 WWRegField WoWRegField }
        CGIF4 { 12 1 WWRegField WoWRegField }
        CTCIF4 { 13 1 WWRegField WoWRegField }
        CHTIF4 { 14 1 WWRegField WoWRegField }
        CTEIF4 { 15 1 WWRegField WoWRegField }
        CGIF5 { 16 1 WWRegField WoWRegField }
        CTCIF5 { 17 1 WWRegField WoWRegField }
        CHTIF5 { 18 1 WWRegField WoWRegField }
        CTEIF5 { 19 1 WWRegField WoWRegField }
        CGIF6 { 20 1 WWRegField WoWRegField }
        CTCIF6 { 21 1 WWRegField WoWRegField }
        CHTIF6 { 22 1 WWRegField WoWRegField }
        CTEIF6 { 23 1 WWRegField WoWRegField }
        CGIF7 { 24 1 WWRegField WoWRegField }
        CTCIF7 { 25 1 WWRegField WoWRegField }
        CHTIF7 { 26 1 WWRegField WoWRegField }
        CTEIF7 { 27 1 WWRegField WoWRegField }
    }

    /// Channel selection register.
    CSELR {
        0xA8 0x20 0x0000_0000 RReg WReg;
        /// DMA channel 1 selection.
        C1S { 0 4 RRRegField WWRegField }
        /// DMA channel 2 selection.
        C2S { 4 4 RRRegField WWRegField }
        /// DMA channel 3 selection.
        C3S { 8 4 RRRegField WWRegField }
        /// DMA channel 4 selection.
        C4S { 12 4 RRRegField WWRegField }
        /// DMA channel 5 selection.
        C5S { 16 4 RRRegField WWRegField }
        /// DMA channel 6 selection.
        C6S { 20 4 RRRegField WWRegField }
        /// DMA channel 7 selection.
        C7S { 24 4 RRRegField WWRegField }
    }
}
