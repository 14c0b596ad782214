mod configuration;
mod logging;
mod progress;
mod recording;
