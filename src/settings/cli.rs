use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "Sign in with an email and password")]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, env = "SIGNIN_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    #[arg(long)]
    pub remember_me: bool,

    #[arg(long)]
    pub show_password: bool,
}
