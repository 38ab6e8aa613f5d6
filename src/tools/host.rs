//! # Host Introspection
//!
//! Snapshots of the running system and its network interfaces. Collection
//! sits behind [`SystemProbe`] so screens can be driven with canned data.

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use sysinfo::{CpuRefreshKind, Networks, RefreshKind, System};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInfo {
    pub os: String,
    /// Distribution or release name, when the OS reports one.
    pub os_version: Option<String>,
    pub arch: String,
    pub cpu_count: usize,
    pub runtime_version: String,
    pub hostname: String,
    pub username: String,
    pub home_dir: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
    pub temp_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    /// CIDR notation, e.g. `192.168.1.4/24`.
    pub addresses: Vec<String>,
    pub hardware_addr: String,
    pub is_up: bool,
    pub is_loopback: bool,
}

pub trait SystemProbe {
    fn system_info(&mut self) -> SystemInfo;
    fn network_interfaces(&mut self) -> Vec<NetworkInterface>;
}

/// Probe backed by `sysinfo` and, on Unix, `getifaddrs`.
#[derive(Debug, Default)]
pub struct HostProbe;

impl SystemProbe for HostProbe {
    fn system_info(&mut self) -> SystemInfo {
        let system =
            System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));
        let cpu_count = match system.cpus().len() {
            0 => std::thread::available_parallelism().map_or(1, |n| n.get()),
            n => n,
        };

        SystemInfo {
            os: env::consts::OS.to_string(),
            os_version: System::long_os_version(),
            arch: env::consts::ARCH.to_string(),
            cpu_count,
            runtime_version: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")).to_string(),
            hostname: System::host_name().unwrap_or_default(),
            username: env::var("USER")
                .or_else(|_| env::var("USERNAME"))
                .unwrap_or_default(),
            home_dir: dirs::home_dir(),
            working_dir: env::current_dir().ok(),
            temp_dir: env::temp_dir(),
        }
    }

    fn network_interfaces(&mut self) -> Vec<NetworkInterface> {
        let networks = Networks::new_with_refreshed_list();
        let flags = interface_flags();

        let mut interfaces: BTreeMap<String, NetworkInterface> = BTreeMap::new();
        for (name, data) in networks.iter() {
            let addresses: Vec<String> = data
                .ip_networks()
                .iter()
                .map(|net| format!("{}/{}", net.addr, net.prefix))
                .collect();
            let loopback_addr = data.ip_networks().iter().any(|net| net.addr.is_loopback());
            let (is_up, is_loopback) = flags
                .get(name)
                .copied()
                .unwrap_or((!addresses.is_empty(), loopback_addr));

            interfaces.insert(
                name.clone(),
                NetworkInterface {
                    name: name.clone(),
                    addresses,
                    hardware_addr: hardware_addr(&data.mac_address().to_string()),
                    is_up,
                    is_loopback,
                },
            );
        }

        // Interfaces with no traffic counters still show up in getifaddrs
        for (name, (is_up, is_loopback)) in flags {
            interfaces.entry(name.clone()).or_insert(NetworkInterface {
                name,
                is_up,
                is_loopback,
                ..Default::default()
            });
        }

        interfaces.into_values().collect()
    }
}

/// Empty for interfaces without a hardware address.
fn hardware_addr(mac: &str) -> String {
    if mac == "00:00:00:00:00:00" {
        String::new()
    } else {
        mac.to_string()
    }
}

/// Interface name → (up, loopback).
#[cfg(unix)]
fn interface_flags() -> BTreeMap<String, (bool, bool)> {
    use std::ffi::CStr;

    let mut flags = BTreeMap::new();
    let mut head: *mut libc::ifaddrs = std::ptr::null_mut();

    // SAFETY: on success `head` owns a linked list released by freeifaddrs below
    if unsafe { libc::getifaddrs(&mut head) } != 0 {
        log::warn!("getifaddrs failed: {}", std::io::Error::last_os_error());
        return flags;
    }

    let mut cursor = head;
    while !cursor.is_null() {
        // SAFETY: cursor is a non-null node of the list returned above
        let entry = unsafe { &*cursor };
        if !entry.ifa_name.is_null() {
            // SAFETY: ifa_name is a NUL-terminated string owned by the list
            let name = unsafe { CStr::from_ptr(entry.ifa_name) }
                .to_string_lossy()
                .into_owned();
            let raw = entry.ifa_flags as libc::c_int;
            let slot = flags.entry(name).or_insert((false, false));
            slot.0 |= raw & libc::IFF_UP != 0;
            slot.1 |= raw & libc::IFF_LOOPBACK != 0;
        }
        cursor = entry.ifa_next;
    }

    // SAFETY: head came from a successful getifaddrs and is freed once
    unsafe { libc::freeifaddrs(head) };
    flags
}

#[cfg(not(unix))]
fn interface_flags() -> BTreeMap<String, (bool, bool)> {
    BTreeMap::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_info_basics() {
        let info = HostProbe.system_info();
        assert_eq!(info.os, env::consts::OS);
        assert_eq!(info.arch, env::consts::ARCH);
        assert!(info.cpu_count >= 1);
        assert!(info.runtime_version.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_interfaces_sorted_and_unique() {
        let interfaces = HostProbe.network_interfaces();
        let names: Vec<&str> = interfaces.iter().map(|i| i.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_zero_mac_is_blank() {
        assert_eq!(hardware_addr("00:00:00:00:00:00"), "");
        assert_eq!(hardware_addr("aa:bb:cc:dd:ee:ff"), "aa:bb:cc:dd:ee:ff");
    }
}
