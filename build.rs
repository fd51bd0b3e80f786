use std::cmp::Ordering;
use std::env;
use std::process::Command;

// CPU features worth enabling so the fixed-width lane loops vectorize
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    rustc_flag: &'static str,
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx2" => 0,
            "sse4_1" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all supported CPU features that widen the lane loops
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse4_1",
                rustc_flag: "+sse4.1",
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                name: "avx2",
                rustc_flag: "+avx2,+avx",
                cfg_flag: "avx2",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                rustc_flag: "+neon",
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Linux reports CPU features in /proc/cpuinfo
fn detect_linux(features: &mut [CpuFeature]) {
    if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
        let contents = cpuinfo.to_lowercase();
        for feature in features.iter_mut() {
            feature.detected = contents.contains(feature.name);
        }
    }
}

// macOS reports CPU features through sysctl
fn detect_macos(features: &mut [CpuFeature]) {
    let output = Command::new("sysctl").args(["-a"]).output();

    if let Ok(output) = output {
        let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

        for feature in features.iter_mut() {
            match feature.name {
                "avx2" => feature.detected = contents.contains("hw.optional.avx2_0: 1"),
                "sse4_1" => feature.detected = contents.contains("hw.optional.sse4_1: 1"),
                "neon" => feature.detected = contents.contains("hw.optional.neon: 1"),
                _ => {}
            }
        }
    }
}

fn detect_cpu_features(features: &mut [CpuFeature]) {
    if cfg!(target_os = "linux") {
        detect_linux(features);
    } else if cfg!(target_os = "macos") {
        detect_macos(features);
    }
    // No windows detection for now
}

fn apply(features: &mut [CpuFeature]) {
    // Sort features by priority (highest first)
    features.sort();

    // Find and use the highest detected feature (if any)
    // if no feature is detected, use the fallback codegen
    let cfg_flag = features
        .iter()
        .find(|cpu_feature| cpu_feature.detected)
        .map(|cpu_feature| {
            println!("cargo:rustc-flag=-C");
            println!("cargo:rustc-flag=target-feature={}", cpu_feature.rustc_flag);
            cpu_feature.cfg_flag
        })
        .unwrap_or("fallback");

    println!("cargo:rustc-cfg={cfg_flag}");

    println!("cargo::rustc-check-cfg=cfg(avx2)");
    println!("cargo::rustc-check-cfg=cfg(sse)");
    println!("cargo::rustc-check-cfg=cfg(neon)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");
}

fn main() {
    let mut features = CpuFeature::features();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    let is_native_build = host == target;

    // Only run CPU detection for native builds
    if is_native_build {
        detect_cpu_features(&mut features);
    }

    // Pass RUSTFLAGS for enabling target features
    apply(&mut features);
}
