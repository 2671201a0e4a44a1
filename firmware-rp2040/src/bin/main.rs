#![no_std]
#![no_main]

use core::cell::RefCell;

use control_firmware_rp2040::config::{POLL_PERIOD_MS, POT_LOG_STEP, STICK_CONFIG};
use control_firmware_rp2040::{
    AdcInput, Button, ControlSnapshot, Controls, EmbassyClock, HalInput, Joystick, Pot, SharedAdc,
};
use defmt::{debug, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker, Timer};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

/// Signal for passing control snapshots from the poll to the report task.
/// Using Signal instead of Channel provides "latest value wins" semantics;
/// the poll task merges unread clicks forward.
static SNAPSHOT_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, ControlSnapshot>> =
    StaticCell::new();

/// The ADC, shared by the stick axes and the potentiometer.
static ADC: StaticCell<SharedAdc<'static>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Control firmware starting...");

    let p = embassy_rp::init(Default::default());

    let signal = SNAPSHOT_SIGNAL.init(Signal::new());

    // --- Analog Setup ---
    let adc = ADC.init(Mutex::new(RefCell::new(Adc::new_blocking(
        p.ADC,
        AdcConfig::default(),
    ))));
    let stick_x = AdcInput::new(adc, Channel::new_pin(p.PIN_26, Pull::None));
    let stick_y = AdcInput::new(adc, Channel::new_pin(p.PIN_27, Pull::None));
    let pot = AdcInput::new(adc, Channel::new_pin(p.PIN_28, Pull::None));

    // --- Digital Setup ---
    let stick_button = HalInput::new(Input::new(p.PIN_22, Pull::Up));
    let push_button = HalInput::new(Input::new(p.PIN_15, Pull::Up));

    let mut controls = Controls::new(
        Joystick::with_config(stick_x, stick_y, stick_button, EmbassyClock, STICK_CONFIG),
        Button::new(push_button, EmbassyClock),
        Pot::new(pot),
    );

    // Let the pull-ups and the stick settle before trimming.
    Timer::after_millis(50).await;
    controls.calibrate();

    // On-board LED, toggled on every click
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(poll_task(controls, signal, led).unwrap());
    spawner.spawn(report_task(signal).unwrap());

    info!("Control firmware initialized, polling every {} ms", POLL_PERIOD_MS);
}

/// Poll task - samples every control and signals the latest snapshot.
#[embassy_executor::task]
async fn poll_task(
    mut controls: Controls<'static>,
    signal: &'static Signal<CriticalSectionRawMutex, ControlSnapshot>,
    mut led: Output<'static>,
) {
    let mut ticker = Ticker::every(Duration::from_millis(POLL_PERIOD_MS));
    loop {
        let mut snapshot = controls.poll();
        if snapshot.any_click() {
            led.toggle();
        }
        // Keep clicks the report task has not picked up yet.
        if let Some(pending) = signal.try_take() {
            snapshot = pending.merge(snapshot);
        }
        signal.signal(snapshot);
        ticker.next().await;
    }
}

/// Report task - logs clicks and movement.
#[embassy_executor::task]
async fn report_task(signal: &'static Signal<CriticalSectionRawMutex, ControlSnapshot>) {
    let mut last = ControlSnapshot::default();
    loop {
        let snapshot = signal.wait().await;

        if snapshot.stick_clicked {
            info!("Stick button clicked");
        }
        if snapshot.button_clicked {
            info!("Push button clicked");
        }
        if snapshot.stick != last.stick {
            debug!("Stick: x={} y={}", snapshot.stick.x, snapshot.stick.y);
        }
        if snapshot.pot.abs_diff(last.pot) >= POT_LOG_STEP {
            debug!("Pot: {}", snapshot.pot);
            last.pot = snapshot.pot;
        }
        last.stick = snapshot.stick;
    }
}
