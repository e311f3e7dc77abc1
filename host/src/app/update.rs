//! 更新逻辑

use std::time::Duration;

use face_runtime::FaceInput;
use tracing::trace;

use super::FaceHost;
use crate::clock::TimeSource;

impl<C: TimeSource> FaceHost<C> {
    /// 推进一帧
    ///
    /// 依次：推进时钟 → 时区检查 → 播放器事件 → 唤醒检查 → 环境模式分钟 tick
    /// → 处理输入队列 → 绘制。
    ///
    /// # 返回
    /// 本帧绘制的画面（没有重绘请求时为 None）
    pub fn advance(&mut self, dt: Duration) -> Option<String> {
        if !self.host_state.running {
            return None;
        }

        self.host_state.elapsed += dt;
        self.host_state.frames += 1;
        self.clock.tick(dt);

        if self.clock.poll_zone_change() {
            self.events.push_back(FaceInput::TimeZoneChanged);
        }

        let player_events = self.player.update(dt);
        self.events.extend(player_events);

        if self.timer.poll(self.host_state.elapsed) {
            trace!(elapsed_ms = self.host_state.elapsed.as_millis() as u64, "唤醒到期");
            self.events.push_back(FaceInput::TimerFired);
        }

        self.poll_ambient_tick();
        self.pump();
        self.draw()
    }

    /// 环境模式下每跨过一分钟产生一次 TimeTick
    fn poll_ambient_tick(&mut self) {
        if !self.runtime.mode().is_ambient() {
            self.ambient_minute = None;
            return;
        }

        let time = self.clock.now().time;
        let minute = (time.hours(), time.minutes());
        match self.ambient_minute {
            Some(last) if last == minute => {}
            Some(_) => {
                self.ambient_minute = Some(minute);
                self.events.push_back(FaceInput::TimeTick);
            }
            None => self.ambient_minute = Some(minute),
        }
    }
}
