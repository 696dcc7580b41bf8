//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정(저장소 연결, 인덱스 준비, 서비스 조립)을 단계별로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              Salon Identity Service              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// `→ Step 1: Preparing repositories`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: Repositories prepared (2 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 들여쓰기된 하위 작업 상태
///
/// ```text
///    ├─ AccountRepository: indexes ready
///    ├─ OAuthService: google, facebook
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서비스 조립이 끝난 뒤 구성 요소 수를 요약합니다
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 IDENTITY SERVICES READY");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}
