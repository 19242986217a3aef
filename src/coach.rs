//! AI Coach Canned Responses
//!
//! Pure keyword lookup. The input is lowercased, the first matching
//! keyword category wins, and anything unmatched gets the fallback.
//! Shared by the floating coach widget and the full coach page.

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Coach,
}

/// A single entry in the chat history.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachMessage {
    pub id: u32,
    pub message: String,
    pub sender: Sender,
    pub timestamp: String,
}

pub const GREETING: &str = "Hi there! I'm here to help you plan your goal. Please provide the goal title, description, target date, and category.";

const HELP_REPLY: &str = "I'd be happy to help! Here are some general tips for achieving your goals:\n\n1. Break down your goal into smaller, manageable tasks\n2. Set specific, measurable milestones\n3. Create a realistic timeline\n4. Track your progress regularly\n5. Stay accountable with regular check-ins\n\nWhat specific aspect would you like to explore further?";

const PLAN_REPLY: &str = "Great question! Here's a strategic approach to goal achievement:\n\n**Phase 1: Planning (Week 1-2)**\n- Define clear objectives\n- Research best practices\n- Set up tracking systems\n\n**Phase 2: Execution (Week 3-8)**\n- Start with small steps\n- Build consistent habits\n- Monitor progress\n\n**Phase 3: Optimization (Week 9-12)**\n- Review and adjust\n- Celebrate milestones\n- Plan next steps\n\nWould you like me to help you break this down further for a specific goal?";

const MOTIVATION_REPLY: &str = "Staying motivated is key! Here are some proven strategies:\n\n🎯 **Visualize Success**: Picture yourself achieving your goal\n📊 **Track Progress**: Use metrics to see your advancement\n🏆 **Celebrate Wins**: Acknowledge even small achievements\n👥 **Find Support**: Share your journey with others\n📝 **Daily Affirmations**: Remind yourself why this matters\n\nWhat specific aspect of motivation would you like to explore?";

const TIME_REPLY: &str = "Time management is crucial! Here's a framework:\n\n⏰ **Morning Routine**: Start with your most important task\n📅 **Weekly Planning**: Set 3 main priorities each week\n🔄 **Time Blocking**: Dedicate specific time slots\n⚡ **Energy Management**: Work on complex tasks when you're most alert\n🛑 **Buffer Time**: Leave room for unexpected events\n\nWould you like help creating a specific schedule for your goals?";

const GOAL_REPLY: &str = "Setting effective goals is fundamental! Here's the SMART framework:\n\n🎯 **Specific**: Make your goal clear and detailed\n📏 **Measurable**: Include metrics to track progress\n✅ **Achievable**: Ensure it's realistic for your situation\n🎯 **Relevant**: Align with your values and priorities\n⏰ **Time-bound**: Set a deadline for completion\n\nWould you like help applying this framework to a specific goal?";

const FALLBACK_REPLY: &str = "That's an interesting question! I'm here to help you achieve your goals. Could you tell me more about what specific aspect you'd like guidance on? I can help with planning, motivation, time management, goal setting, or any other aspect of personal development.";

/// Pick the canned reply for a user message.
pub fn generate_reply(user_message: &str) -> &'static str {
    let message = user_message.to_lowercase();

    if message.contains("help") || message.contains("advice") {
        return HELP_REPLY;
    }
    if message.contains("plan") || message.contains("strategy") {
        return PLAN_REPLY;
    }
    if message.contains("motivation") || message.contains("stay motivated") {
        return MOTIVATION_REPLY;
    }
    if message.contains("time") || message.contains("schedule") {
        return TIME_REPLY;
    }
    if message.contains("goal") || message.contains("objectives") {
        return GOAL_REPLY;
    }
    FALLBACK_REPLY
}
