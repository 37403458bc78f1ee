//! STM32F103 Blue Pill Joystick Cursor with OLED and RGB LED
//! =============================================================================================
//!
//! This firmware moves a 10x10 square around a 128x64 SSD1306 OLED with an
//! analog joystick and lights an RGB LED according to stick deflection:
//! - Red follows the X axis, blue follows the Y axis (PWM on TIM3)
//! - Button A toggles brightness tracking on and off
//! - The joystick push switch toggles the green LED and the display border
//!
//! Hardware Connections:
//!   OLED Display -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7 (I2C1)
//!      SCL  -> PB6 (I2C1)
//!
//!   Joystick module:
//!      VRx  -> PA0 (ADC1_IN0)
//!      VRy  -> PA1 (ADC1_IN1)
//!      SW   -> PB13 (with pull-up)
//!
//!   Button A -> PB12 (to GND, with pull-up)
//!
//!   RGB LED (common cathode):
//!      R    -> PA6 (TIM3_CH1)
//!      G    -> PB14
//!      B    -> PA7 (TIM3_CH2)
//!
//! Expected Behavior:
//!   - The square starts centred and moves while the stick is deflected
//!   - Presses closer than 300 ms to the last accepted one (on either
//!     button) are ignored
//!   - The raw Y reading is logged over RTT every frame

#![no_std]
#![no_main]

use defmt::{Debug2Format, info, unwrap};
use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_stm32::{
    adc::{self, Adc},
    bind_interrupts,
    exti::ExtiInput,
    gpio::{Level, Output, OutputType, Pull, Speed},
    i2c, peripherals,
    time::{Hertz, khz},
    timer::simple_pwm::{PwmPin, SimplePwm},
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, mutex::Mutex};
use embassy_time::{Instant, Timer};
use panic_probe as _; // Panic handler
use ssd1306::{I2CDisplayInterface, prelude::*};
use static_cell::StaticCell;

use joystick_core::{Config, ModeFlags, RenderLoop, ToggleHandler};
use joystick_cursor::hardware::{
    gpio_button::GpioButtons,
    gpio_led::GpioLed,
    joystick_adc::JoystickAdc,
    oled::Oled,
    pwm_led::PwmLed,
};

#[cfg(feature = "async")]
type I2cMode = embassy_stm32::mode::Async;
#[cfg(not(feature = "async"))]
type I2cMode = embassy_stm32::mode::Blocking;

type Display = Oled<I2CInterface<i2c::I2c<'static, I2cMode>>>;

const CONFIG: Config = Config::DEFAULT;

// Shared between the render loop and the button task
static FLAGS: ModeFlags = ModeFlags::new(&CONFIG);
static DISPLAY: StaticCell<Mutex<ThreadModeRawMutex, Display>> = StaticCell::new();

// Conversion-complete interrupt used by `Adc::read`
bind_interrupts!(struct AdcIrqs {
    ADC1_2 => adc::InterruptHandler<peripherals::ADC1>;
});

#[cfg(feature = "async")]
bind_interrupts!(struct I2cIrqs {
    I2C1_EV => i2c::EventInterruptHandler<peripherals::I2C1>;
    I2C1_ER => i2c::ErrorInterruptHandler<peripherals::I2C1>;
});

/// Main application entry point
///
/// Brings up the peripherals in the order display, buttons, green LED,
/// PWM, ADC, then runs the render loop forever.
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            // Oscillator for bluepill, Bypass for nucleos.
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL9,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
        // ADC clock must stay at or below 14 MHz: 72 / 6 = 12 MHz
        config.rcc.adc_pre = ADCPrescaler::DIV6;
    }
    let p = embassy_stm32::init(config);

    info!("Joystick cursor starting");

    // Configure I2C1 at 400kHz for the OLED
    #[cfg(feature = "async")]
    let oled_i2c = i2c::I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        I2cIrqs,
        p.DMA1_CH6,
        p.DMA1_CH7,
        Hertz(CONFIG.i2c_frequency_hz),
        Default::default(),
    );

    #[cfg(not(feature = "async"))]
    let oled_i2c = i2c::I2c::new_blocking(
        p.I2C1,
        p.PB6,
        p.PB7,
        Hertz(CONFIG.i2c_frequency_hz),
        Default::default(),
    );

    let interface = I2CDisplayInterface::new_custom_address(oled_i2c, CONFIG.display_address);
    let mut oled = Oled::new(interface);
    if let Err(e) = oled.init() {
        defmt::panic!("display init failed: {}", Debug2Format(&e));
    }
    let display = DISPLAY.init(Mutex::new(oled));

    let mut render = RenderLoop::new(CONFIG, &FLAGS);
    {
        let mut screen = display.lock().await;
        if let Err(e) = render.draw(&mut *screen) {
            defmt::panic!("initial frame failed: {}", Debug2Format(&e));
        }
    }

    // Buttons idle high; a press pulls the line low
    let mode_button = ExtiInput::new(p.PB12, p.EXTI12, Pull::Up);
    let joystick_button = ExtiInput::new(p.PB13, p.EXTI13, Pull::Up);
    let green = GpioLed::new(Output::new(p.PB14, Level::Low, Speed::Low));

    unwrap!(spawner.spawn(button_task(
        GpioButtons::new(mode_button, joystick_button),
        green,
        display,
    )));

    // Red and blue on TIM3, both starting dark
    let pwm = SimplePwm::new(
        p.TIM3,
        Some(PwmPin::new_ch1(p.PA6, OutputType::PushPull)),
        Some(PwmPin::new_ch2(p.PA7, OutputType::PushPull)),
        None,
        None,
        khz(1),
        Default::default(),
    );
    let channels = pwm.split();
    let mut red = PwmLed::new(channels.ch1, CONFIG.pwm_wrap);
    let mut blue = PwmLed::new(channels.ch2, CONFIG.pwm_wrap);

    let mut joystick = JoystickAdc::new(Adc::new(p.ADC1), p.PA0, p.PA1);

    loop {
        // Both conversions happen outside the display lock
        let sample = match render.sample(&mut joystick).await {
            Ok(sample) => sample,
            Err(e) => defmt::panic!("adc read failed: {}", Debug2Format(&e)),
        };

        let result = {
            let mut screen = display.lock().await;
            render.present(sample, &mut *screen, &mut red, &mut blue)
        };

        match result {
            Ok(frame) => info!("{}", frame.sample.y),
            Err(e) => defmt::panic!("render failed: {}", Debug2Format(&e)),
        }

        Timer::after_millis(CONFIG.frame_period_ms).await;
    }
}

/// Button Processing Task
///
/// Responsibilities:
/// 1. Wait for a falling edge on either button
/// 2. Timestamp it and pass it through the shared debouncer
/// 3. Toggle the PWM flag, or the green LED and display border
#[embassy_executor::task]
async fn button_task(
    mut buttons: GpioButtons<'static>,
    green: GpioLed<Output<'static>>,
    display: &'static Mutex<ThreadModeRawMutex, Display>,
) {
    let mut handler = ToggleHandler::new(&FLAGS, green);

    loop {
        let button = buttons.next_edge().await;
        // Wrapping 32-bit microsecond clock, like a hardware timer
        let now_us = Instant::now().as_micros() as u32;

        let mut screen = display.lock().await;
        match handler.on_edge(button, now_us, &mut *screen) {
            Ok(Some(toggle)) => info!("{}: {}", button, toggle),
            Ok(None) => defmt::debug!("{} ignored (debounce)", button),
            Err(e) => defmt::panic!("border update failed: {}", Debug2Format(&e)),
        }
    }
}
