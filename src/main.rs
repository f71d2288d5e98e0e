#![no_std]
#![no_main]

mod peripherals;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use chrono::FixedOffset;
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pin, Pull},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, button::Button, display::Display, system::SystemConfig};
use pinetime_ruler_face::{
    system::{
        config,
        time::{seconds_until_next_minute, TimeManager, TimeReference},
        Host, Timestamp,
    },
    ui::{
        ruler_face::RulerFace,
        window::{Event, Window, WindowHandlers},
    },
};

// Include current UTC epoch and local offset at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

/// Backlight level once the first frame is drawn
const BACKLIGHT_LEVEL: u8 = 2;

// Communication channels
static MINUTE_TICK: Signal<ThreadModeRawMutex, ()> = Signal::new();

/// Clock and preferences of the watch
#[derive(Clone, Copy)]
struct PineTimeHost {
    time: TimeManager,
    offset: FixedOffset,
}

impl Host for PineTimeHost {
    fn now(&self) -> Timestamp {
        self.time.now(Instant::now().as_secs())
    }

    fn utc_offset(&self) -> FixedOffset {
        self.offset
    }

    fn clock_is_24h_style(&self) -> bool {
        config::clock_is_24h_style()
    }
}

/// Signal every full wall-clock minute.
#[embassy_executor::task(pool_size = 1)]
async fn minute_tick(host: PineTimeHost) {
    loop {
        let wait = seconds_until_next_minute(host.now());
        Timer::after(Duration::from_secs(wait)).await;
        MINUTE_TICK.signal(());
    }
}

/// Owns the window: load once, redraw on every minute tick.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display, mut backlight: Backlight, host: PineTimeHost) {
    let mut window = Window::new(WindowHandlers::<RulerFace, _>::watch_face());
    window.dispatch(Event::Load, &host);

    loop {
        if let Err(err) = display.render(&mut window, &host) {
            defmt::warn!("Rendering failed: {}", err);
        }
        if backlight.brightness() == 0 {
            backlight.set(BACKLIGHT_LEVEL);
        }

        MINUTE_TICK.wait().await;
        window.dispatch(Event::Tick, &host);
    }
}

/// Polls the button every 10ms, a press switches between 12h and 24h.
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button) {
    loop {
        if button.pressed().await {
            let use_24h = config::toggle_clock_style();
            defmt::info!("Clock style: {}", if use_24h { "24h" } else { "12h" });
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after(Duration::from_millis(10)).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize Backlight, dark until the first frame is drawn
    let backlight = Backlight::init(
        Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
        0,
    );

    // Initialize Button
    let button = Button::init(
        Input::new(p.P0_13.degrade(), Pull::None),
        Output::new(p.P0_15.degrade(), Level::Low, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let mut display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26.degrade(), Level::Low, OutputDrive::Standard),
    ));
    unwrap!(display.clear());

    // Wall clock starts at the build time
    let host = PineTimeHost {
        time: TimeManager::init(TimeReference::new(UTC_TIME, Instant::now().as_secs())),
        offset: config::utc_offset(UTC_OFFSET),
    };

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_lcd(display, backlight, host)));
    unwrap!(spawner.spawn(minute_tick(host)));
    unwrap!(spawner.spawn(poll_button(button)));
}
