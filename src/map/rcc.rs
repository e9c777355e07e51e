//! Reset and clock control.

crate::periph! {
    /// Reset and clock control.
    pub struct RccPeriph;

    RCC 0x4002_1000;

    /// Clock control register.
    CR {
        0x00 0x20 0x0000_0063 RReg WReg;
        /// MSI clock enable.
        MSION { 0 1 RRRegField WWRegField }
        /// MSI clock ready flag.
        MSIRDY { 1 1 RRRegField RoRRegField }
        /// MSI clock PLL enable.
        MSIPLLEN { 2 1 RRRegField WWRegField }
        /// MSI clock range selection.
        MSIRGSEL { 3 1 RRRegField WWRegField }
        /// MSI clock ranges.
        MSIRANGE { 4 4 RRRegField WWRegField }
        /// HSI16 clock enable.
        HSION { 8 1 RRRegField WWRegField }
        /// HSI16 always enable for peripheral kernels.
        HSIKERON { 9 1 RRRegField WWRegField }
        /// HSI16 clock ready flag.
        HSIRDY { 10 1 RRRegField RoRRegField }
        /// HSI16 automatic start from Stop.
        HSIASFS { 11 1 RRRegField WWRegField }
        /// HSE clock enable.
        HSEON { 16 1 RRRegField WWRegField }
        /// HSE clock ready flag.
        HSERDY { 17 1 RRRegField RoRRegField }
        /// HSE crystal oscillator bypass.
        HSEBYP { 18 1 RRRegField WWRegField }
        /// Clock security system enable.
        CSSON { 19 1 RRRegField WWRegField }
        /// Main PLL enable.
        PLLON { 24 1 RRRegField WWRegField }
        /// Main PLL clock ready flag.
        PLLRDY { 25 1 RRRegField RoRRegField }
        /// SAI1 PLL enable.
        PLLSAI1ON { 26 1 RRRegField WWRegField }
        /// SAI1 PLL clock ready flag.
        PLLSAI1RDY { 27 1 RRRegField RoRRegField }
        /// SAI2 PLL enable.
        PLLSAI2ON { 28 1 RRRegField WWRegField }
        /// SAI2 PLL clock ready flag.
        PLLSAI2RDY { 29 1 RRRegField RoRRegField }
    }

    /// Internal clock sources calibration register.
    ICSCR {
        0x04 0x20 0x1000_0000 RReg WReg;
        /// MSI clock calibration.
        MSICAL { 0 8 RRRegField RoRRegField }
        /// MSI clock trimming.
        MSITRIM { 8 8 RRRegField WWRegField }
        /// HSI16 clock calibration.
        HSICAL { 16 8 RRRegField RoRRegField }
        /// HSI16 clock trimming.
        HSITRIM { 24 7 RRRegField WWRegField }
    }

    /// Clock configuration register.
    CFGR {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// System clock switch.
        SW { 0 2 RRRegField WWRegField }
        /// System clock switch status.
        SWS { 2 2 RRRegField RoRRegField }
        /// AHB prescaler.
        HPRE { 4 4 RRRegField WWRegField }
        /// APB1 prescaler.
        PPRE1 { 8 3 RRRegField WWRegField }
        /// APB2 prescaler.
        PPRE2 { 11 3 RRRegField WWRegField }
        /// Wakeup from Stop and CSS backup clock selection.
        STOPWUCK { 15 1 RRRegField WWRegField }
        /// Microcontroller clock output.
        MCOSEL { 24 4 RRRegField WWRegField }
        /// Microcontroller clock output prescaler.
        MCOPRE { 28 3 RRRegField WWRegField }
    }

    /// PLL configuration register.
    PLLCFGR {
        0x0C 0x20 0x0000_1000 RReg WReg;
        /// Main PLL entry clock source.
        PLLSRC { 0 2 RRRegField WWRegField }
        /// Division factor for the main PLL input clock.
        PLLM { 4 3 RRRegField WWRegField }
        /// Main PLL multiplication factor for VCO.
        PLLN { 8 7 RRRegField WWRegField }
        PLLPEN { 16 1 RRRegField WWRegField }
        PLLP { 17 1 RRRegField WWRegField }
        PLLQEN { 20 1 RRRegField WWRegField }
        PLLQ { 21 2 RRRegField WWRegField }
        PLLREN { 24 1 RRRegField WWRegField }
        PLLR { 25 2 RRRegField WWRegField }
        /// Main PLL division factor for PLLSAI2CLK.
        PLLPDIV { 27 5 RRRegField WWRegField }
    }

    /// PLLSAI1 configuration register.
    PLLSAI1CFGR {
        0x10 0x20 0x0000_1000 RReg WReg;
        PLLSAI1N { 8 7 RRRegField WWRegField }
        PLLSAI1PEN { 16 1 RRRegField WWRegField }
        PLLSAI1P { 17 1 RRRegField WWRegField }
        PLLSAI1QEN { 20 1 RRRegField WWRegField }
        PLLSAI1Q { 21 2 RRRegField WWRegField }
        PLLSAI1REN { 24 1 RRRegField WWRegField }
        PLLSAI1R { 25 2 RRRegField WWRegField }
        PLLSAI1PDIV { 27 5 RRRegField WWRegField }
    }

    /// PLLSAI2 configuration register.
    PLLSAI2CFGR {
        0x14 0x20 0x0000_1000 RReg WReg;
        PLLSAI2N { 8 7 RRRegField WWRegField }
        PLLSAI2PEN { 16 1 RRRegField WWRegField }
        PLLSAI2P { 17 1 RRRegField WWRegField }
        PLLSAI2REN { 24 1 RRRegField WWRegField }
        PLLSAI2R { 25 2 RRRegField WWRegField }
        PLLSAI2PDIV { 27 5 RRRegField WWRegField }
    }

    /// Clock interrupt enable register.
    CIER {
        0x18 0x20 0x0000_0000 RReg WReg;
        LSIRDYIE { 0 1 RRRegField WWRegField }
        LSERDYIE { 1 1 RRRegField WWRegField }
        MSIRDYIE { 2 1 RRRegField WWRegField }
        HSIRDYIE { 3 1 RRRegField WWRegField }
        HSERDYIE { 4 1 RRRegField WWRegField }
        PLLRDYIE { 5 1 RRRegField WWRegField }
        PLLSAI1RDYIE { 6 1 RRRegField WWRegField }
        PLLSAI2RDYIE { 7 1 RRRegField WWRegField }
        LSECSSIE { 9 1 RRRegField WWRegField }
        HSI48RDYIE { 10 1 RRRegField WWRegField }
    }

    /// Clock interrupt flag register.
    CIFR {
        0x1C 0x20 0x0000_0000 RReg RoReg;
        LSIRDYF { 0 1 RRRegField RoRRegField }
        LSERDYF { 1 1 RRRegField RoRRegField }
        MSIRDYF { 2 1 RRRegField RoRRegField }
        HSIRDYF { 3 1 RRRegField RoRRegField }
        HSERDYF { 4 1 RRRegField RoRRegField }
        PLLRDYF { 5 1 RRRegField RoRRegField }
        PLLSAI1RDYF { 6 1 RRRegField RoRRegField }
        PLLSAI2RDYF { 7 1 RRRegField RoRRegField }
        CSSF { 8 1 RRRegField RoRRegField }
        LSECSSF { 9 1 RRRegField RoRRegField }
        HSI48RDYF { 10 1 RRRegField RoRRegField }
    }

    /// Clock interrupt clear register.
    CICR {
        0x20 0x20 0x0000_0000 WReg WoReg;
        LSIRDYC { 0 1 WWRegField WoWRegField }
        LSERDYC { 1 1 WWRegField WoWRegField }
        MSIRDYC { 2 1 WWRegField WoWRegField }
        HSIRDYC { 3 1 WWRegField WoWRegField }
        HSERDYC { 4 1 WWRegField WoWRegField }
        PLLRDYC { 5 1 WWRegField WoWRegField }
        PLLSAI1RDYC { 6 1 WWRegField WoWRegField }
        PLLSAI2RDYC { 7 1 WWRegField WoWRegField }
        CSSC { 8 1 WWRegField WoWRegField }
        LSECSSC { 9 1 WWRegField WoWRegField }
        HSI48RDYC { 10 1 WWRegField WoWRegField }
    }

    /// AHB1 peripheral reset register.
    AHB1RSTR {
        0x28 0x20 0x0000_0000 RReg WReg;
        DMA1RST { 0 1 RRRegField WWRegField }
        DMA2RST { 1 1 RRRegField WWRegField }
        FLASHRST { 8 1 RRRegField WWRegField }
        CRCRST { 12 1 RRRegField WWRegField }
        TSCRST { 16 1 RRRegField WWRegField }
        DMA2DRST { 17 1 RRRegField WWRegField }
    }

    /// AHB2 peripheral reset register.
    AHB2RSTR {
        0x2C 0x20 0x0000_0000 RReg WReg;
        GPIOARST { 0 1 RRRegField WWRegField }
        GPIOBRST { 1 1 RRRegField WWRegField }
        GPIOCRST { 2 1 RRRegField WWRegField }
        GPIODRST { 3 1 RRRegField WWRegField }
        GPIOERST { 4 1 RRRegField WWRegField }
        GPIOFRST { 5 1 RRRegField WWRegField }
        GPIOGRST { 6 1 RRRegField WWRegField }
        GPIOHRST { 7 1 RRRegField WWRegField }
        GPIOIRST { 8 1 RRRegField WWRegField }
        OTGFSRST { 12 1 RRRegField WWRegField }
        ADCRST { 13 1 RRRegField WWRegField }
        DCMIRST { 14 1 RRRegField WWRegField }
        AESRST { 16 1 RRRegField WWRegField }
        HASHRST { 17 1 RRRegField WWRegField }
        RNGRST { 18 1 RRRegField WWRegField }
    }

    /// AHB3 peripheral reset register.
    AHB3RSTR {
        0x30 0x20 0x0000_0000 RReg WReg;
        FMCRST { 0 1 RRRegField WWRegField }
        QSPIRST { 8 1 RRRegField WWRegField }
    }

    /// APB1 peripheral reset register 1.
    APB1RSTR1 {
        0x38 0x20 0x0000_0000 RReg WReg;
        TIM2RST { 0 1 RRRegField WWRegField }
        TIM3RST { 1 1 RRRegField WWRegField }
        TIM4RST { 2 1 RRRegField WWRegField }
        TIM5RST { 3 1 RRRegField WWRegField }
        TIM6RST { 4 1 RRRegField WWRegField }
        TIM7RST { 5 1 RRRegField WWRegField }
        LCDRST { 9 1 RRRegField WWRegField }
        SPI2RST { 14 1 RRRegField WWRegField }
        SPI3RST { 15 1 RRRegField WWRegField }
        USART2RST { 17 1 RRRegField WWRegField }
        USART3RST { 18 1 RRRegField WWRegField }
        UART4RST { 19 1 RRRegField WWRegField }
        UART5RST { 20 1 RRRegField WWRegField }
        I2C1RST { 21 1 RRRegField WWRegField }
        I2C2RST { 22 1 RRRegField WWRegField }
        I2C3RST { 23 1 RRRegField WWRegField }
        CRSRST { 24 1 RRRegField WWRegField }
        CAN1RST { 25 1 RRRegField WWRegField }
        CAN2RST { 26 1 RRRegField WWRegField }
        PWRRST { 28 1 RRRegField WWRegField }
        DAC1RST { 29 1 RRRegField WWRegField }
        OPAMPRST { 30 1 RRRegField WWRegField }
        LPTIM1RST { 31 1 RRRegField WWRegField }
    }

    /// APB1 peripheral reset register 2.
    APB1RSTR2 {
        0x3C 0x20 0x0000_0000 RReg WReg;
        LPUART1RST { 0 1 RRRegField WWRegField }
        I2C4RST { 1 1 RRRegField WWRegField }
        SWPMI1RST { 2 1 RRRegField WWRegField }
        LPTIM2RST { 5 1 RRRegField WWRegField }
    }

    /// APB2 peripheral reset register.
    APB2RSTR {
        0x40 0x20 0x0000_0000 RReg WReg;
        SYSCFGRST { 0 1 RRRegField WWRegField }
        SDMMC1RST { 10 1 RRRegField WWRegField }
        TIM1RST { 11 1 RRRegField WWRegField }
        SPI1RST { 12 1 RRRegField WWRegField }
        TIM8RST { 13 1 RRRegField WWRegField }
        USART1RST { 14 1 RRRegField WWRegField }
        TIM15RST { 16 1 RRRegField WWRegField }
        TIM16RST { 17 1 RRRegField WWRegField }
        TIM17RST { 18 1 RRRegField WWRegField }
        SAI1RST { 21 1 RRRegField WWRegField }
        SAI2RST { 22 1 RRRegField WWRegField }
        DFSDM1RST { 24 1 RRRegField WWRegField }
    }

    /// AHB1 peripheral clock enable register.
    AHB1ENR {
        0x48 0x20 0x0000_0100 RReg WReg;
        DMA1EN { 0 1 RRRegField WWRegField }
        DMA2EN { 1 1 RRRegField WWRegField }
        FLASHEN { 8 1 RRRegField WWRegField }
        CRCEN { 12 1 RRRegField WWRegField }
        TSCEN { 16 1 RRRegField WWRegField }
        DMA2DEN { 17 1 RRRegField WWRegField }
    }

    /// AHB2 peripheral clock enable register.
    AHB2ENR {
        0x4C 0x20 0x0000_0000 RReg WReg;
        GPIOAEN { 0 1 RRRegField WWRegField }
        GPIOBEN { 1 1 RRRegField WWRegField }
        GPIOCEN { 2 1 RRRegField WWRegField }
        GPIODEN { 3 1 RRRegField WWRegField }
        GPIOEEN { 4 1 RRRegField WWRegField }
        GPIOFEN { 5 1 RRRegField WWRegField }
        GPIOGEN { 6 1 RRRegField WWRegField }
        GPIOHEN { 7 1 RRRegField WWRegField }
        GPIOIEN { 8 1 RRRegField WWRegField }
        OTGFSEN { 12 1 RRRegField WWRegField }
        ADCEN { 13 1 RRRegField WWRegField }
        DCMIEN { 14 1 RRRegField WWRegField }
        AESEN { 16 1 RRRegField WWRegField }
        HASHEN { 17 1 RRRegField WWRegField }
        RNGEN { 18 1 RRRegField WWRegField }
    }

    /// AHB3 peripheral clock enable register.
    AHB3ENR {
        0x50 0x20 0x0000_0000 RReg WReg;
        FMCEN { 0 1 RRRegField WWRegField }
        QSPIEN { 8 1 RRRegField WWRegField }
    }

    /// APB1 peripheral clock enable register 1.
    APB1ENR1 {
        0x58 0x20 0x0000_0000 RReg WReg;
        TIM2EN { 0 1 RRRegField WWRegField }
        TIM3EN { 1 1 RRRegField WWRegField }
        TIM4EN { 2 1 RRRegField WWRegField }
        TIM5EN { 3 1 RRRegField WWRegField }
        TIM6EN { 4 1 RRRegField WWRegField }
        TIM7EN { 5 1 RRRegField WWRegField }
        LCDEN { 9 1 RRRegField WWRegField }
        RTCAPBEN { 10 1 RRRegField WWRegField }
        WWDGEN { 11 1 RRRegField WWRegField }
        SPI2EN { 14 1 RRRegField WWRegField }
        SPI3EN { 15 1 RRRegField WWRegField }
        USART2EN { 17 1 RRRegField WWRegField }
        USART3EN { 18 1 RRRegField WWRegField }
        UART4EN { 19 1 RRRegField WWRegField }
        UART5EN { 20 1 RRRegField WWRegField }
        I2C1EN { 21 1 RRRegField WWRegField }
        I2C2EN { 22 1 RRRegField WWRegField }
        I2C3EN { 23 1 RRRegField WWRegField }
        CRSEN { 24 1 RRRegField WWRegField }
        CAN1EN { 25 1 RRRegField WWRegField }
        CAN2EN { 26 1 RRRegField WWRegField }
        PWREN { 28 1 RRRegField WWRegField }
        DAC1EN { 29 1 RRRegField WWRegField }
        OPAMPEN { 30 1 RRRegField WWRegField }
        LPTIM1EN { 31 1 RRRegField WWRegField }
    }

    /// APB1 peripheral clock enable register 2.
    APB1ENR2 {
        0x5C 0x20 0x0000_0000 RReg WReg;
        LPUART1EN { 0 1 RRRegField WWRegField }
        I2C4EN { 1 1 RRRegField WWRegField }
        SWPMI1EN { 2 1 RRRegField WWRegField }
        LPTIM2EN { 5 1 RRRegField WWRegField }
    }

    /// APB2 peripheral clock enable register.
    APB2ENR {
        0x60 0x20 0x0000_0000 RReg WReg;
        SYSCFGEN { 0 1 RRRegField WWRegField }
        FWEN { 7 1 RRRegField WWRegField }
        SDMMC1EN { 10 1 RRRegField WWRegField }
        TIM1EN { 11 1 RRRegField WWRegField }
        SPI1EN { 12 1 RRRegField WWRegField }
        TIM8EN { 13 1 RRRegField WWRegField }
        USART1EN { 14 1 RRRegField WWRegField }
        TIM15EN { 16 1 RRRegField WWRegField }
        TIM16EN { 17 1 RRRegField WWRegField }
        TIM17EN { 18 1 RRRegField WWRegField }
        SAI1EN { 21 1 RRRegField WWRegField }
        SAI2EN { 22 1 RRRegField WWRegField }
        DFSDM1EN { 24 1 RRRegField WWRegField }
    }

    /// AHB1 peripheral clocks enable in Sleep and Stop modes register.
    AHB1SMENR {
        0x68 0x20 0x0001_1303 RReg WReg;
        DMA1SMEN { 0 1 RRRegField WWRegField }
        DMA2SMEN { 1 1 RRRegField WWRegField }
        FLASHSMEN { 8 1 RRRegField WWRegField }
        SRAM1SMEN { 9 1 RRRegField WWRegField }
        CRCSMEN { 12 1 RRRegField WWRegField }
        TSCSMEN { 16 1 RRRegField WWRegField }
        DMA2DSMEN { 17 1 RRRegField WWRegField }
    }

    /// AHB2 peripheral clocks enable in Sleep and Stop modes register.
    AHB2SMENR {
        0x6C 0x20 0x0005_32FF RReg WReg;
        GPIOASMEN { 0 1 RRRegField WWRegField }
        GPIOBSMEN { 1 1 RRRegField WWRegField }
        GPIOCSMEN { 2 1 RRRegField WWRegField }
        GPIODSMEN { 3 1 RRRegField WWRegField }
        GPIOESMEN { 4 1 RRRegField WWRegField }
        GPIOFSMEN { 5 1 RRRegField WWRegField }
        GPIOGSMEN { 6 1 RRRegField WWRegField }
        GPIOHSMEN { 7 1 RRRegField WWRegField }
        GPIOISMEN { 8 1 RRRegField WWRegField }
        SRAM2SMEN { 9 1 RRRegField WWRegField }
        OTGFSSMEN { 12 1 RRRegField WWRegField }
        ADCSMEN { 13 1 RRRegField WWRegField }
        DCMISMEN { 14 1 RRRegField WWRegField }
        AESSMEN { 16 1 RRRegField WWRegField }
        HASHSMEN { 17 1 RRRegField WWRegField }
        RNGSMEN { 18 1 RRRegField WWRegField }
    }

    /// AHB3 peripheral clocks enable in Sleep and Stop modes register.
    AHB3SMENR {
        0x70 0x20 0x0000_0101 RReg WReg;
        FMCSMEN { 0 1 RRRegField WWRegField }
        QSPISMEN { 8 1 RRRegField WWRegField }
    }

    /// APB1 peripheral clocks enable in Sleep and Stop modes register 1.
    APB1SMENR1 {
        0x78 0x20 0xF2FE_CA3F RReg WReg;
        TIM2SMEN { 0 1 RRRegField WWRegField }
        TIM3SMEN { 1 1 RRRegField WWRegField }
        TIM4SMEN { 2 1 RRRegField WWRegField }
        TIM5SMEN { 3 1 RRRegField WWRegField }
        TIM6SMEN { 4 1 RRRegField WWRegField }
        TIM7SMEN { 5 1 RRRegField WWRegField }
        LCDSMEN { 9 1 RRRegField WWRegField }
        RTCAPBSMEN { 10 1 RRRegField WWRegField }
        WWDGSMEN { 11 1 RRRegField WWRegField }
        SPI2SMEN { 14 1 RRRegField WWRegField }
        SPI3SMEN { 15 1 RRRegField WWRegField }
        USART2SMEN { 17 1 RRRegField WWRegField }
        USART3SMEN { 18 1 RRRegField WWRegField }
        UART4SMEN { 19 1 RRRegField WWRegField }
        UART5SMEN { 20 1 RRRegField WWRegField }
        I2C1SMEN { 21 1 RRRegField WWRegField }
        I2C2SMEN { 22 1 RRRegField WWRegField }
        I2C3SMEN { 23 1 RRRegField WWRegField }
        CRSSMEN { 24 1 RRRegField WWRegField }
        CAN1SMEN { 25 1 RRRegField WWRegField }
        CAN2SMEN { 26 1 RRRegField WWRegField }
        PWRSMEN { 28 1 RRRegField WWRegField }
        DAC1SMEN { 29 1 RRRegField WWRegField }
        OPAMPSMEN { 30 1 RRRegField WWRegField }
        LPTIM1SMEN { 31 1 RRRegField WWRegField }
    }

    /// APB1 peripheral clocks enable in Sleep and Stop modes register 2.
    APB1SMENR2 {
        0x7C 0x20 0x0000_0025 RReg WReg;
        LPUART1SMEN { 0 1 RRRegField WWRegField }
        I2C4SMEN { 1 1 RRRegField WWRegField }
        SWPMI1SMEN { 2 1 RRRegField WWRegField }
        LPTIM2SMEN { 5 1 RRRegField WWRegField }
    }

    /// APB2 peripheral clocks enable in Sleep and Stop modes register.
    APB2SMENR {
        0x80 0x20 0x0167_7C01 RReg WReg;
        SYSCFGSMEN { 0 1 RRRegField WWRegField }
        SDMMC1SMEN { 10 1 RRRegField WWRegField }
        TIM1SMEN { 11 1 RRRegField WWRegField }
        SPI1SMEN { 12 1 RRRegField WWRegField }
        TIM8SMEN { 13 1 RRRegField WWRegField }
        USART1SMEN { 14 1 RRRegField WWRegField }
        TIM15SMEN { 16 1 RRRegField WWRegField }
        TIM16SMEN { 17 1 RRRegField WWRegField }
        TIM17SMEN { 18 1 RRRegField WWRegField }
        SAI1SMEN { 21 1 RRRegField WWRegField }
        SAI2SMEN { 22 1 RRRegField WWRegField }
        DFSDM1SMEN { 24 1 RRRegField WWRegField }
    }

    /// Peripherals independent clock configuration register.
    CCIPR {
        0x88 0x20 0x0000_0000 RReg WReg;
        USART1SEL { 0 2 RRRegField WWRegField }
        USART2SEL { 2 2 RRRegField WWRegField }
        USART3SEL { 4 2 RRRegField WWRegField }
        UART4SEL { 6 2 RRRegField WWRegField }
        UART5SEL { 8 2 RRRegField WWRegField }
        LPUART1SEL { 10 2 RRRegField WWRegField }
        I2C1SEL { 12 2 RRRegField WWRegField }
        I2C2SEL { 14 2 RRRegField WWRegField }
        I2C3SEL { 16 2 RRRegField WWRegField }
        LPTIM1SEL { 18 2 RRRegField WWRegField }
        LPTIM2SEL { 20 2 RRRegField WWRegField }
        SAI1SEL { 22 2 RRRegField WWRegField }
        SAI2SEL { 24 2 RRRegField WWRegField }
        CLK48SEL { 26 2 RRRegField WWRegField }
        ADCSEL { 28 2 RRRegField WWRegField }
        SWPMI1SEL { 30 1 RRRegField WWRegField }
        DFSDM1SEL { 31 1 RRRegField WWRegField }
    }

    /// Backup domain control register.
    BDCR {
        0x90 0x20 0x0000_0000 RReg WReg;
        /// LSE oscillator enable.
        LSEON { 0 1 RRRegField WWRegField }
        /// LSE oscillator ready.
        LSERDY { 1 1 RRRegField RoRRegField }
        /// LSE oscillator bypass.
        LSEBYP { 2 1 RRRegField WWRegField }
        /// LSE oscillator drive capability.
        LSEDRV { 3 2 RRRegField WWRegField }
        LSECSSON { 5 1 RRRegField WWRegField }
        LSECSSD { 6 1 RRRegField RoRRegField }
        /// RTC clock source selection.
        RTCSEL { 8 2 RRRegField WWRegField }
        /// RTC clock enable.
        RTCEN { 15 1 RRRegField WWRegField }
        /// Backup domain software reset.
        BDRST { 16 1 RRRegField WWRegField }
        LSCOEN { 24 1 RRRegField WWRegField }
        LSCOSEL { 25 1 RRRegField WWRegField }
    }

    /// Control/status register.
    CSR {
        0x94 0x20 0x0C00_0600 RReg WReg;
        /// LSI oscillator enable.
        LSION { 0 1 RRRegField WWRegField }
        /// LSI oscillator ready.
        LSIRDY { 1 1 RRRegField RoRRegField }
        /// MSI range after Standby mode.
        MSISRANGE { 8 4 RRRegField WWRegField }
        /// Remove reset flag.
        RMVF { 23 1 RRRegField WWRegField }
        FWRSTF { 24 1 RRRegField RoRRegField }
        OBLRSTF { 25 1 RRRegField RoRRegField }
        PINRSTF { 26 1 RRRegField RoRRegField }
        BORRSTF { 27 1 RRRegField RoRRegField }
        SFTRSTF { 28 1 RRRegField RoRRegField }
        IWDGRSTF { 29 1 RRRegField RoRRegField }
        WWDGRSTF { 30 1 RRRegField RoRRegField }
        LPWRRSTF { 31 1 RRRegField RoRRegField }
    }

    /// Clock recovery RC register.
    CRRCR {
        0x98 0x20 0x0000_0000 RReg WReg;
        /// HSI48 clock enable.
        HSI48ON { 0 1 RRRegField WWRegField }
        /// HSI48 clock ready flag.
        HSI48RDY { 1 1 RRRegField RoRRegField }
        /// HSI48 clock calibration.
        HSI48CAL { 7 9 RRRegField RoRRegField }
    }

    /// Peripherals independent clock configuration register 2.
    CCIPR2 {
        0x9C 0x20 0x0000_0000 RReg WReg;
        I2C4SEL { 0 2 RRRegField WWRegField }
    }
}
