mod capture;
mod library;
mod player;
mod resampler;
