use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

/// Every piece of UI text that changes with the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    Title,
    ScoreLabel,
    SpeedLabel,
    Start,
    Pause,
    Continue,
    Restart,
    GameOver,
    FinalScoreLabel,
    PlayAgain,
    Cleared,
    LangToggle,
    Quit,
    TooSmall,
}

impl Lang {
    pub fn toggled(self) -> Lang {
        match self {
            Lang::Zh => Lang::En,
            Lang::En => Lang::Zh,
        }
    }

    pub fn text(self, text: Text) -> &'static str {
        match self {
            Lang::Zh => match text {
                Text::Title => "贪吃蛇游戏",
                Text::ScoreLabel => "分数: ",
                Text::SpeedLabel => "速度: ",
                Text::Start => "开始游戏",
                Text::Pause => "暂停",
                Text::Continue => "继续",
                Text::Restart => "重新开始",
                Text::GameOver => "游戏结束!",
                Text::FinalScoreLabel => "你的最终分数: ",
                Text::PlayAgain => "再玩一次",
                Text::Cleared => "蛇填满了整个棋盘!",
                Text::LangToggle => "EN",
                Text::Quit => "退出",
                Text::TooSmall => "终端太小",
            },
            Lang::En => match text {
                Text::Title => "Snake Game",
                Text::ScoreLabel => "Score: ",
                Text::SpeedLabel => "Speed: ",
                Text::Start => "Start Game",
                Text::Pause => "Pause",
                Text::Continue => "Continue",
                Text::Restart => "Restart",
                Text::GameOver => "Game Over!",
                Text::FinalScoreLabel => "Your Final Score: ",
                Text::PlayAgain => "Play Again",
                Text::Cleared => "The snake filled the board!",
                Text::LangToggle => "中文",
                Text::Quit => "Quit",
                Text::TooSmall => "Terminal too small",
            },
        }
    }
}
