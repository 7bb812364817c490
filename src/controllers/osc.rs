// src/controllers/osc.rs
// OSC control channel
//
// Stands in for the watch's phone-side configuration page: settings field
// updates, connection state, weather deliveries, and quiet-time state all
// arrive as OSC messages and are queued as typed commands for the update
// loop. Malformed messages are dropped silently.

use nannou_osc as osc;
use std::error::Error;

#[derive(Debug)]
pub enum FaceCommand {
    SetShowSecondHand {
        enabled: bool,
    },
    SetHourlyVibe {
        enabled: bool,
    },
    SetConnectionVibe {
        mode: i32,
    },
    SetEnableHealth {
        enabled: bool,
    },
    SetInvertColors {
        enabled: bool,
    },
    SetWeatherEnabled {
        enabled: bool,
    },
    SetWeatherUnit {
        unit: i32,
    },
    ConnectionState {
        connected: bool,
    },
    WeatherReport {
        temperature_c: i32,
    },
    WeatherError,
    QuietTimeState {
        active: bool,
    },
}

pub struct OscController {
    command_queue: Vec<FaceCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match message.addr.as_str() {
                    "/settings/second_hand" => {
                        if let [osc::Type::Int(enabled)] = &message.args[..] {
                            self.command_queue.push(FaceCommand::SetShowSecondHand {
                                enabled: *enabled != 0,
                            });
                        }
                    }
                    "/settings/hourly_vibe" => {
                        if let [osc::Type::Int(enabled)] = &message.args[..] {
                            self.command_queue.push(FaceCommand::SetHourlyVibe {
                                enabled: *enabled != 0,
                            });
                        }
                    }
                    "/settings/connection_vibe" => {
                        if let [osc::Type::Int(mode)] = &message.args[..] {
                            self.command_queue
                                .push(FaceCommand::SetConnectionVibe { mode: *mode });
                        }
                    }
                    "/settings/health" => {
                        if let [osc::Type::Int(enabled)] = &message.args[..] {
                            self.command_queue.push(FaceCommand::SetEnableHealth {
                                enabled: *enabled != 0,
                            });
                        }
                    }
                    "/settings/invert" => {
                        if let [osc::Type::Int(enabled)] = &message.args[..] {
                            self.command_queue.push(FaceCommand::SetInvertColors {
                                enabled: *enabled != 0,
                            });
                        }
                    }
                    "/settings/weather_enabled" => {
                        if let [osc::Type::Int(enabled)] = &message.args[..] {
                            self.command_queue.push(FaceCommand::SetWeatherEnabled {
                                enabled: *enabled != 0,
                            });
                        }
                    }
                    "/settings/weather_unit" => {
                        if let [osc::Type::Int(unit)] = &message.args[..] {
                            self.command_queue
                                .push(FaceCommand::SetWeatherUnit { unit: *unit });
                        }
                    }
                    "/connection/state" => {
                        if let [osc::Type::Int(connected)] = &message.args[..] {
                            self.command_queue.push(FaceCommand::ConnectionState {
                                connected: *connected != 0,
                            });
                        }
                    }
                    "/weather/report" => {
                        if let [osc::Type::Int(temperature_c)] = &message.args[..] {
                            self.command_queue.push(FaceCommand::WeatherReport {
                                temperature_c: *temperature_c,
                            });
                        }
                    }
                    "/weather/error" => {
                        self.command_queue.push(FaceCommand::WeatherError);
                    }
                    "/quiet/state" => {
                        if let [osc::Type::Int(active)] = &message.args[..] {
                            self.command_queue.push(FaceCommand::QuietTimeState {
                                active: *active != 0,
                            });
                        }
                    }
                    _ => (),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<FaceCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

/// Loopback sender used by the debug keyboard map, so manual testing drives
/// the app through the same channel the configuration page would.
pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_port: u16) -> Result<Self, Box<dyn Error>> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    fn send_int(&self, addr: &str, value: i32) {
        let args = vec![osc::Type::Int(value)];
        self.sender
            .send(
                (addr.to_string(), args),
                (self.target_addr.as_str(), self.target_port),
            )
            .ok();
    }

    pub fn send_second_hand(&self, enabled: bool) {
        self.send_int("/settings/second_hand", enabled as i32);
    }

    pub fn send_hourly_vibe(&self, enabled: bool) {
        self.send_int("/settings/hourly_vibe", enabled as i32);
    }

    pub fn send_connection_vibe(&self, mode: i32) {
        self.send_int("/settings/connection_vibe", mode);
    }

    pub fn send_health(&self, enabled: bool) {
        self.send_int("/settings/health", enabled as i32);
    }

    pub fn send_invert(&self, enabled: bool) {
        self.send_int("/settings/invert", enabled as i32);
    }

    pub fn send_weather_enabled(&self, enabled: bool) {
        self.send_int("/settings/weather_enabled", enabled as i32);
    }

    pub fn send_weather_unit(&self, unit: i32) {
        self.send_int("/settings/weather_unit", unit);
    }

    pub fn send_connection_state(&self, connected: bool) {
        self.send_int("/connection/state", connected as i32);
    }

    pub fn send_weather_report(&self, temperature_c: i32) {
        self.send_int("/weather/report", temperature_c);
    }

    pub fn send_weather_error(&self) {
        let addr = "/weather/error".to_string();
        let args: Vec<osc::Type> = Vec::new();
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_quiet_state(&self, active: bool) {
        self.send_int("/quiet/state", active as i32);
    }
}
