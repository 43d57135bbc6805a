use crate::camera::DEFAULT_EYE;
use crate::math::Vec3;

use std::fs::File;
use std::io::Read;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_SCREEN: usize = 500;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: DEFAULT_SCREEN,
            height: DEFAULT_SCREEN,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    // ascii P3 pixmap
    #[default]
    Ppm,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct RenderSettings {
    pub filename: Option<String>,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub output_format: OutputFormat,
    pub threads: Option<u16>,
    pub eye: Option<[f64; 3]>,
}

impl RenderSettings {
    pub fn eye(&self) -> Vec3 {
        self.eye.map(Vec3::from).unwrap_or(DEFAULT_EYE)
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: None,
            resolution: Resolution::default(),
            output_format: OutputFormat::default(),
            threads: Some(1),
            eye: None,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    SingleThreaded,
}

#[derive(Deserialize, Clone)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub output_directory: Option<String>,
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

#[derive(Clone)]
pub struct Config {
    pub scene_file: String,
    pub output_directory: String,
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file,
            output_directory: data
                .output_directory
                .unwrap_or_else(|| String::from("output")),
            renderer: data.renderer,
            render_settings: data.render_settings,
        }
    }
}

pub fn parse_settings(input: &str) -> anyhow::Result<TOMLConfig> {
    let num_cpus = num_cpus::get();
    let mut settings: TOMLConfig = toml::from_str(input)?;
    for render_settings in settings.render_settings.iter_mut() {
        render_settings.threads = match render_settings.threads {
            Some(expr) => Some(expr),
            None => Some(num_cpus as u16),
        };
    }
    Ok(settings)
}

pub fn get_settings(filepath: String) -> anyhow::Result<TOMLConfig> {
    let mut input = String::new();
    File::open(&filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read config file {}", filepath))?;
    parse_settings(&input).with_context(|| format!("failed to parse config file {}", filepath))
}
