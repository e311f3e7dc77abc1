//! # App 模块
//!
//! 表盘宿主：持有 Runtime、播放器、唤醒定时器、渲染器和时钟，
//! 以单线程 reactor 的方式按 FIFO 顺序处理所有输入。

mod draw;
mod update;

use std::collections::VecDeque;

use face_runtime::{FaceInput, FaceRuntime};
use tracing::info;

use crate::clock::TimeSource;
use crate::command_executor::{CommandExecutor, ExecuteContext};
use crate::config::AppConfig;
use crate::player::DigitPlayer;
use crate::renderer::{RenderState, Renderer, TextRenderer};
use crate::state::HostState;
use crate::timer::WakeTimer;

/// 表盘宿主
pub struct FaceHost<C: TimeSource> {
    /// 应用配置
    pub config: AppConfig,
    pub host_state: HostState,
    pub runtime: FaceRuntime,
    pub player: DigitPlayer,
    pub timer: WakeTimer,
    pub renderer: Renderer,
    pub render_state: RenderState,
    pub command_executor: CommandExecutor,
    clock: C,
    /// 待处理的输入（FIFO）
    events: VecDeque<FaceInput>,
    /// 环境模式下上一次见到的 (时, 分)，用于产生每分钟 tick
    ambient_minute: Option<(u8, u8)>,
}

impl<C: TimeSource> FaceHost<C> {
    /// 按配置创建宿主
    pub fn new(config: AppConfig, clock: C) -> Self {
        let timing = &config.timing;
        let render = &config.render;

        let runtime = FaceRuntime::with_out_duration(timing.out_duration());
        let player = DigitPlayer::new(timing.in_duration())
            .with_easing(timing.out_easing, timing.in_easing);
        let renderer = Renderer::new(TextRenderer::new(
            render.background,
            render.logo,
            render.separator,
        ));

        Self {
            runtime,
            player,
            timer: WakeTimer::new(),
            renderer,
            render_state: RenderState::new(),
            command_executor: CommandExecutor::new(),
            host_state: HostState::new(),
            clock,
            events: VecDeque::new(),
            ambient_minute: None,
            config,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// 启动：资源就绪，表盘变为可见
    pub fn start(&mut self) {
        info!(time = %self.clock.now().time, "表盘启动");
        self.events.push_back(FaceInput::AssetsLoaded);
        self.events.push_back(FaceInput::VisibilityChanged(true));
        self.pump();
    }

    /// 投递一个输入并立即处理队列
    pub fn dispatch(&mut self, input: FaceInput) {
        self.events.push_back(input);
        self.pump();
    }

    /// 可见性变化
    pub fn set_visible(&mut self, visible: bool) {
        info!(visible, "可见性变化");
        self.dispatch(FaceInput::VisibilityChanged(visible));
    }

    /// 环境模式变化
    pub fn set_ambient(&mut self, ambient: bool) {
        info!(ambient, "环境模式变化");
        self.dispatch(FaceInput::AmbientModeChanged(ambient));
    }

    /// 销毁表盘
    pub fn shutdown(&mut self) {
        self.dispatch(FaceInput::Destroy);
        self.host_state.stop();
        info!(frames = self.host_state.frames, "表盘销毁");
    }

    /// 按到达顺序处理全部待处理输入
    fn pump(&mut self) {
        while let Some(input) = self.events.pop_front() {
            let now = self.clock.now();
            let commands = self.runtime.handle(input, now);
            if commands.is_empty() {
                continue;
            }

            let mut ctx = ExecuteContext {
                player: &mut self.player,
                timer: &mut self.timer,
                renderer: &mut self.renderer,
                render_state: &mut self.render_state,
                now: self.host_state.elapsed,
            };
            self.command_executor.execute_batch(&commands, &mut ctx);
        }
    }
}
