//! # Face Host
//!
//! 六位数字动画表盘的命令行宿主。
//!
//! ## 用法
//!
//! ```bash
//! # 虚拟时间，从 12:34:56 开始模拟 5 秒，逐帧打印
//! cargo run -p face-host -- --start 12:34:56 --seconds 5
//!
//! # 第 2 秒进入环境模式，持续 61 秒
//! cargo run -p face-host -- --start 12:34:56 --seconds 70 --ambient-at 2 --ambient-for 61
//!
//! # 真实时间，在终端内原地刷新
//! cargo run -p face-host -- --realtime
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::{Local, Timelike};
use clap::Parser;
use face_runtime::TimeFields;
use host::{AppConfig, FaceHost, ManualClock, SystemClock};
use tracing::info;

/// 隐藏后重新可见前的间隔
const HIDE_DURATION: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "face-host")]
#[command(about = "六位数字动画表盘 - 文本宿主")]
#[command(version)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// 虚拟时钟起始时间 HH:MM:SS（默认：当前本地时间）
    #[arg(short, long)]
    start: Option<TimeFields>,

    /// 模拟时长（秒）
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// 进入环境模式的时刻（秒）
    #[arg(long)]
    ambient_at: Option<f64>,

    /// 环境模式持续时长（秒）
    #[arg(long, default_value_t = 61.0)]
    ambient_for: f64,

    /// 隐藏表盘的时刻（秒），一秒后重新可见
    #[arg(long)]
    hide_at: Option<f64>,

    /// 使用真实系统时钟，实时刷新
    #[arg(long)]
    realtime: bool,
}

/// 在虚拟时间线上按时刻触发的生命周期事件
#[derive(Debug, Clone, Copy)]
enum Lifecycle {
    EnterAmbient,
    ExitAmbient,
    Hide,
    Show,
}

/// 把 CLI 秒数换成 `Duration`；负数按 0 处理，非有限值报错。
fn seconds(value: f64) -> anyhow::Result<Duration> {
    let value = if value < 0.0 { 0.0 } else { value };
    Duration::try_from_secs_f64(value).with_context(|| format!("秒数超出范围: {value}"))
}

fn schedule(cli: &Cli) -> anyhow::Result<Vec<(Duration, Lifecycle)>> {
    let mut events = Vec::new();
    if let Some(at) = cli.ambient_at {
        let at = seconds(at)?;
        events.push((at, Lifecycle::EnterAmbient));
        let exit = at.checked_add(seconds(cli.ambient_for)?).context("退出 ambient 的时刻溢出")?;
        events.push((exit, Lifecycle::ExitAmbient));
    }
    if let Some(at) = cli.hide_at {
        let at = seconds(at)?;
        events.push((at, Lifecycle::Hide));
        events.push((at.checked_add(HIDE_DURATION).context("恢复显示的时刻溢出")?, Lifecycle::Show));
    }
    events.sort_by_key(|(at, _)| *at);
    Ok(events)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config);
    config.validate().context("配置无效")?;

    tracing_subscriber::fmt()
        .with_max_level(config.debug.level()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!(
        out_ms = config.timing.out_duration_ms,
        in_ms = config.timing.in_duration_ms,
        frame_ms = config.timing.frame_interval_ms,
        "配置已加载"
    );

    if cli.realtime {
        run_realtime(config)
    } else {
        run_headless(&cli, config)
    }
}

/// 虚拟时间运行：逐帧打印绘制出的画面
fn run_headless(cli: &Cli, config: AppConfig) -> anyhow::Result<()> {
    let start = match cli.start {
        Some(start) => start,
        None => TimeFields::from_seconds_of_day(u64::from(Local::now().num_seconds_from_midnight())),
    };
    let frame = config.timing.frame_interval();
    let total = seconds(cli.seconds)?;
    let mut pending = schedule(cli)?.into_iter().peekable();

    let mut host = FaceHost::new(config, ManualClock::starting_at(start));
    host.start();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    while host.host_state.elapsed < total {
        while let Some((_, event)) = pending.next_if(|(at, _)| *at <= host.host_state.elapsed) {
            apply(&mut host, event);
        }

        if let Some(drawn) = host.advance(frame) {
            writeln!(
                out,
                "{:>9.3}s |{}|",
                host.host_state.elapsed.as_secs_f64(),
                drawn
            )?;
        }
    }

    host.shutdown();
    info!(draws = host.renderer.draws(), "模拟结束");
    Ok(())
}

/// 真实时间运行：在同一行原地刷新，直到进程被终止
fn run_realtime(config: AppConfig) -> anyhow::Result<()> {
    let frame = config.timing.frame_interval();
    let mut host = FaceHost::new(config, SystemClock::new());
    host.start();

    let stdout = std::io::stdout();
    let mut last = Instant::now();
    while host.host_state.running {
        std::thread::sleep(frame);
        let now = Instant::now();
        let dt = now - last;
        last = now;

        if let Some(drawn) = host.advance(dt) {
            let mut out = stdout.lock();
            write!(out, "\r{}", drawn)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn apply<C: host::TimeSource>(host: &mut FaceHost<C>, event: Lifecycle) {
    match event {
        Lifecycle::EnterAmbient => host.set_ambient(true),
        Lifecycle::ExitAmbient => host.set_ambient(false),
        Lifecycle::Hide => host.set_visible(false),
        Lifecycle::Show => host.set_visible(true),
    }
}
