//! Static page content and control domains for the hosting UI

use rustler::NifStruct;
use serde::Serialize;

use crate::channel::ChannelKind;
use crate::params::{SNR_DEFAULT_DB, SNR_MAX_DB, SNR_MIN_DB};

#[derive(NifStruct, Serialize, Debug, Clone, PartialEq)]
#[module = "Wicsada.Channels.Types.PageLayout"]
pub struct PageLayout {
    pub page_title: String,
    pub title: String,
    pub intro: String,
    pub topics: Vec<String>,
    pub sidebar_header: String,
    pub channel_label: String,
    pub channel_options: Vec<String>,
    pub snr_label: String,
    /// Channel options that read the SNR slider; the host disables it for the rest
    pub snr_channel_options: Vec<String>,
    pub snr_min_db: i64,
    pub snr_max_db: i64,
    pub snr_default_db: i64,
    pub footer: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_title: "WiCSADA - Wireless Channel Simulator".to_string(),
            title: "📡 WiCSADA - Wireless Channel Simulator and Diversity Analyzer".to_string(),
            intro: "This tool demonstrates basic wireless channel behaviors and performance:"
                .to_string(),
            topics: vec![
                "AWGN Channel".to_string(),
                "Rayleigh Fading".to_string(),
                "2x2 MIMO Capacity Estimation".to_string(),
            ],
            sidebar_header: "Simulation Controls".to_string(),
            channel_label: "Select Channel Type".to_string(),
            channel_options: ChannelKind::ALL.iter().map(|k| k.label().to_string()).collect(),
            snr_label: "SNR (dB)".to_string(),
            snr_channel_options: ChannelKind::ALL
                .iter()
                .filter(|k| k.uses_snr())
                .map(|k| k.label().to_string())
                .collect(),
            snr_min_db: SNR_MIN_DB,
            snr_max_db: SNR_MAX_DB,
            snr_default_db: SNR_DEFAULT_DB,
            footer: "Developed for FI1926 - Advances in Wireless Communication, Anna University ©"
                .to_string(),
        }
    }
}
