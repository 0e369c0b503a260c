//! 终端命令解析

/// 用户输入的一行命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowHelp,
    ShowGrammar,
    ShowVocabulary,
    ShowChat,
    More,
    Refresh,
    Usage,
    Quit,
    /// 选择列表中的条目（从 1 开始编号）
    Select(usize),
    /// 聊天消息
    Say(String),
    Unknown(String),
}

/// 解析一行输入；空行返回 `None`
///
/// 聊天视图中除斜杠命令外的所有输入（包括纯数字）都当作消息发送。
pub fn parse_command(line: &str, in_chat: bool) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let command = match line {
        "/help" | "/scenarios" => Command::ShowHelp,
        "/grammar" => Command::ShowGrammar,
        "/vocab" | "/vocabulary" => Command::ShowVocabulary,
        "/chat" => Command::ShowChat,
        "/more" => Command::More,
        "/refresh" => Command::Refresh,
        "/?" | "/usage" => Command::Usage,
        "/quit" | "/exit" => Command::Quit,
        _ if line.starts_with('/') => Command::Unknown(line.to_string()),
        _ if in_chat => Command::Say(line.to_string()),
        _ => match line.parse::<usize>() {
            Ok(number) if number > 0 => Command::Select(number),
            _ => Command::Unknown(line.to_string()),
        },
    };

    Some(command)
}

/// 命令说明
pub const USAGE: &str = "\
Commands:
  /help       10-minute English help (conversation scenarios)
  /grammar    grammar basics
  /vocab      vocabulary lessons
  /chat       free chat
  /more       load more items
  /refresh    reload the current list
  /quit       exit
  <number>    open the numbered item of the current list
In chat, any other text is sent as a message.";
