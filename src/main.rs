use {
  access_token::AccessToken,
  anyhow::{Context, bail},
  client::Client,
  comment::Comment,
  config::Config,
  forest::Forest,
  more_children::MoreChildren,
  payload::Payload,
  render::render_comments,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  source::SubmissionSource,
  std::{backtrace::BacktraceStatus, env, process},
  submission::Submission,
  thing::{CommentData, MoreData, Thing},
  thread::Thread,
  transcript::transcribe,
  utils::deserialize_optional_author,
};

mod access_token;
mod client;
mod comment;
mod config;
mod forest;
mod more_children;
mod payload;
mod render;
mod source;
mod submission;
mod thing;
mod thread;
mod transcript;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn run() -> Result {
  let mut arguments = env::args().skip(1);

  let Some(url) = arguments.next() else {
    bail!("usage: twx-reddit <url>");
  };

  let config = Config::from_env()?;

  let client = Client::new(&config)?;

  let payload = transcribe(&client, &url, &config)?;

  println!("{}", serde_json::to_string(&payload)?);

  Ok(())
}

fn main() {
  if let Err(error) = run() {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
