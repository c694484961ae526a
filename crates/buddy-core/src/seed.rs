//! Curated scenario content and the bulk load that installs it.

use anyhow::{Context, Result};
use buddy_memory::ScenarioStore;
use buddy_schema::{Category, NewScenario};

/// One curated row. A few triggers still carry accents; the store folds them
/// on insert.
#[derive(Debug, Clone, Copy)]
pub struct SeedScenario {
    pub category: Category,
    pub trigger: &'static str,
    pub response: &'static str,
    pub tips: &'static str,
}

impl SeedScenario {
    pub fn to_new(&self) -> NewScenario {
        NewScenario {
            category: self.category,
            trigger: self.trigger.to_owned(),
            response: self.response.to_owned(),
            tips: self.tips.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedReport {
    Skipped { existing: usize },
    Replaced { inserted: usize },
}

/// Install [`SEED_SCENARIOS`], replacing whatever the store holds.
///
/// Skipped when the store already has at least as many rows as the seed set,
/// unless `force` is set. The replace is a single transaction, so a failure
/// leaves the previous rows in place.
pub async fn seed_scenarios(store: &dyn ScenarioStore, force: bool) -> Result<SeedReport> {
    let existing = store
        .count()
        .await
        .context("failed to count existing scenarios")?;
    if !force && existing >= SEED_SCENARIOS.len() {
        tracing::info!(existing, "scenario seed skipped");
        return Ok(SeedReport::Skipped { existing });
    }

    let batch = SEED_SCENARIOS.iter().map(SeedScenario::to_new).collect();
    let inserted = store
        .replace_all(batch)
        .await
        .context("scenario seed failed; previous scenarios kept")?;
    tracing::info!(inserted, replaced = existing, "scenario seed installed");
    Ok(SeedReport::Replaced { inserted })
}

pub const SEED_SCENARIOS: &[SeedScenario] = &[
    SeedScenario {
        category: Category::Stress,
        trigger: "stress thi cu kiem tra",
        response: "Bạn đang chịu áp lực thi cử - điều này rất phổ biến và hoàn toàn có thể vượt qua. Hãy chia nhỏ nội dung cần ôn thành các phần 25 phút (Pomodoro), nghỉ 5 phút giữa mỗi phần. Não bạn sẽ hấp thụ tốt hơn nhiều khi không bị nhồi nhét liên tục.",
        tips: "Viết ra 3 chủ đề quan trọng nhất cần ôn, tập trung từng cái một",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress ap luc gia dinh bo me",
        response: "Áp lực từ gia đình đôi khi nặng nề hơn cả bài vở. Bố mẹ thường kỳ vọng cao vì họ yêu thương bạn, nhưng điều đó không có nghĩa bạn phải gánh một mình. Hãy thử nói chuyện thẳng thắn với bố mẹ về cảm xúc của mình - nhiều bạn bất ngờ vì bố mẹ sẵn sàng lắng nghe hơn họ tưởng.",
        tips: "Chọn một buổi tối yên tĩnh, chia sẻ cảm xúc bằng câu 'Con cảm thấy...' thay vì chỉ trích",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress nhieu viec qua tai qua",
        response: "Khi mọi thứ dồn lại quá nhiều, não bạn bị quá tải và không thể hoạt động hiệu quả. Bước đầu tiên: dừng lại và thở. Hít vào 4 giây, giữ 4 giây, thở ra 6 giây - lặp 5 lần. Sau đó viết ra TẤT CẢ việc cần làm để đầu óc được giải phóng.",
        tips: "Dùng ma trận Eisenhower: chia việc thành 'gấp-quan trọng', 'gấp-ít quan trọng', 'không gấp-quan trọng', 'bỏ qua'",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress cang thang dau dau met moi",
        response: "Căng thẳng kéo dài biểu hiện qua cơ thể: đau đầu, mệt mỏi là tín hiệu cơ thể đang cần giúp đỡ. Đừng bỏ qua. Hãy uống đủ nước (não cần 2L/ngày), vận động nhẹ 15 phút, và đảm bảo ngủ đủ 7-8 tiếng tối nay.",
        tips: "Massage nhẹ vùng thái dương và cổ gáy trong 2 phút để giảm đau đầu tức thì",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress truoc ky thi lon dai hoc",
        response: "Kỳ thi đại học là áp lực thực sự lớn. Nhưng nhớ rằng: không có kỳ thi nào quyết định toàn bộ cuộc đời bạn. Hãy chuẩn bị tốt nhất có thể, nhưng cũng chấp nhận rằng kết quả không hoàn toàn trong tay bạn - và điều đó ổn thôi.",
        tips: "3 ngày trước thi: ôn nhẹ, ngủ đủ giấc, ăn sáng đầy đủ - đây quan trọng hơn nhồi bài",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress bi ban be ap luc dong loai",
        response: "Áp lực từ bạn bè và mạng xã hội (ai cũng có vẻ học giỏi, thành công hơn) rất độc hại. Thực tế, người ta chỉ đăng highlight của cuộc sống, không ai đăng lúc họ thất bại. Hãy tập trung vào hành trình của chính bạn.",
        tips: "Giảm 30 phút lướt mạng xã hội mỗi ngày, thay bằng làm một việc bạn thích",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress cong viec hoc nhieu qua khong xong",
        response: "Cảm giác bị chìm ngập trong công việc học tập. Hãy thử quy tắc '2 phút': nếu việc gì làm được trong 2 phút, làm ngay. Việc lớn hơn thì chia nhỏ - mỗi phần không quá 30 phút. Bắt đầu từ việc DỄ NHẤT để tạo đà.",
        tips: "Dùng app Todoist hoặc viết tay danh sách, gạch bỏ khi hoàn thành - não rất thích cảm giác này",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress lo ngai tuong lai khong biet lam gi",
        response: "Lo lắng về tương lai nghề nghiệp là hoàn toàn bình thường ở độ tuổi học sinh. Bạn không cần biết mình muốn làm gì cả đời ngay lúc này. Hãy tập trung khám phá: thử nhiều thứ, chú ý điều gì khiến bạn hứng thú và quên mất thời gian.",
        tips: "Thử '5 câu hỏi tại sao': viết một điều bạn thích, hỏi 'tại sao' 5 lần để tìm ra giá trị thực sự",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress thi truot hat thi truot mon",
        response: "Trượt môn không phải là thất bại cuối cùng - đó là thông tin để bạn học cách học hiệu quả hơn. Nhiều người thành công từng trượt nhiều lần. Hãy phân tích: trượt vì thiếu kiến thức, thiếu thời gian, hay thiếu phương pháp? Mỗi nguyên nhân có giải pháp khác nhau.",
        tips: "Gặp thầy cô hỏi thẳng: 'Em cần cải thiện điểm gì để thi lại tốt hơn?'",
    },
    SeedScenario {
        category: Category::Stress,
        trigger: "stress bi so sanh voi anh chi nguoi khac gioi hon",
        response: "Bị so sánh rất đau. Nhưng bạn đang được so sánh với người khác trong khi chỉ có thể trở thành phiên bản tốt hơn của chính mình. Anh/chị giỏi hơn không có nghĩa bạn kém - họ có lợi thế và hoàn cảnh khác nhau. Cuộc đua duy nhất có ý nghĩa là với bản thân bạn ngày hôm qua.",
        tips: "Mỗi tối viết 1 điều bạn làm tốt hơn hôm qua, dù nhỏ",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang hoi hop truoc khi thi bai thuyet trinh",
        response: "Hồi hộp trước sự kiện quan trọng là phản ứng bình thường của cơ thể - đó là năng lượng, không phải yếu đuối. Hãy đổi góc nhìn: 'Tôi đang hứng khởi' thay vì 'Tôi đang lo'. Nghiên cứu cho thấy cách đặt tên cảm xúc này thực sự cải thiện hiệu suất.",
        tips: "Thực hành 'power pose' - đứng thẳng, hai tay chống hông 2 phút trước khi vào phòng thi",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang khong biet nguoi khac nghi gi ve minh",
        response: "Lo lắng về đánh giá của người khác (social anxiety) là một trong những nỗi lo phổ biến nhất ở tuổi học sinh. Sự thật: người khác đang bận lo cho bản thân họ hơn là để ý đến bạn. Hiệu ứng spotlight - bạn cảm thấy mình bị chú ý nhiều hơn thực tế.",
        tips: "Khi lo người khác đánh giá, hỏi: 'Bằng chứng nào cho thấy họ đang phán xét tôi?'",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang roi loan lo au cam giac kho thu",
        response: "Cảm giác lo âu liên tục, khó thở, tim đập nhanh - cơ thể đang ở chế độ 'chiến hay chạy'. Để tắt nó: hít thở theo kỹ thuật 4-7-8 (hít 4 giây, giữ 7 giây, thở ra 8 giây). Đặt tay lên ngực cảm nhận nhịp thở. Nói với bản thân: 'Tôi an toàn ngay lúc này.'",
        tips: "Nghe âm thanh sóng não Alpha (có trong mục Audio) - đã được chứng minh giảm lo âu hiệu quả",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang ve suc khoe co benh khong",
        response: "Lo lắng về sức khoẻ là tín hiệu bạn cần chú ý hơn đến cơ thể. Hãy kiểm tra: bạn đã ngủ đủ giấc chưa? Uống đủ nước? Ăn uống ổn không? Nếu triệu chứng kéo dài hơn 2 tuần, hãy đến gặp bác sĩ - đừng tự chẩn đoán trên mạng, thường chỉ khiến lo thêm.",
        tips: "Ghi nhật ký triệu chứng: ghi lại khi nào xuất hiện, kéo dài bao lâu - giúp bác sĩ chẩn đoán chính xác hơn",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang khong ngu duoc dem truoc thi",
        response: "Đêm trước thi mà không ngủ được? Đây là điều rất nhiều bạn gặp. Tin tốt: nghỉ nằm yên cũng giúp cơ thể phục hồi, dù không ngủ. Đừng cố ép bản thân ngủ - áp lực sẽ làm ngược lại. Thay vào đó, thử thả lỏng từng phần cơ thể từ chân lên đầu.",
        tips: "Đọc sách nhàm chán (sách kỹ thuật, không phải tiểu thuyết) - não sẽ tìm cách ngủ để thoát khỏi nhàm chán",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang bi tu choi bi phan xet bi chi trich",
        response: "Sợ bị phán xét hoặc từ chối là một nỗi sợ rất con người. Nhưng hãy nhớ: mỗi lần bị từ chối là bạn đang luyện tập khả năng chịu đựng và phục hồi. Người thành công nhất thường là người bị từ chối nhiều nhất và vẫn tiếp tục.",
        tips: "Thử 'liệu pháp từ chối': mỗi ngày chủ động xin một điều nhỏ có khả năng bị từ chối - xin giảm giá, xin ưu tiên",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang qua khong lam duoc gi cam giac te liet",
        response: "Khi lo âu làm tê liệt không làm được gì, đó gọi là 'analysis paralysis'. Cách thoát: thực hiện 'quy tắc 5 phút' - chỉ cần làm 5 phút, sau đó có thể dừng. Hầu hết mọi người thấy mình tiếp tục khi đã bắt đầu, vì bắt đầu là phần khó nhất.",
        tips: "Đặt hẹn giờ 5 phút, làm bất kỳ phần nào nhỏ nhất của việc cần làm",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang ve gia dinh bo me ca nnhau",
        response: "Lo lắng cho gia đình đang gặp khó khăn là gánh nặng không đáng có ở vai bạn. Bạn không thể giải quyết vấn đề của người lớn, nhưng bạn có thể kiểm soát phản ứng của mình. Hãy tập trung vào những gì trong tầm tay: học tốt, chăm sóc bản thân, hiện diện khi gia đình cần.",
        tips: "Tìm một người lớn đáng tin cậy để nói chuyện - thầy cô tâm lý học đường có thể giúp",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang thi truot dai hoc khong vao duoc",
        response: "Sợ trượt đại học là nỗi sợ có thật. Nhưng hãy nhìn rộng hơn: đại học là một con đường, không phải con đường duy nhất. Nhiều người thành công không học đại học hoặc vào trường không tên tuổi. Điều quan trọng hơn là bạn học gì và làm gì với nó.",
        tips: "Lập kế hoạch B: nếu không vào trường mơ ước, mình sẽ làm gì? Có kế hoạch dự phòng giảm lo âu đáng kể",
    },
    SeedScenario {
        category: Category::Anxiety,
        trigger: "lo lang mang xa hoi so sanh ban ban hoc gioi hon",
        response: "Mạng xã hội là highlight reel - bạn đang so sánh cuộc sống thực của mình với màn trình diễn tốt nhất của người khác. Đó là cuộc chiến không công bằng. Thử 'digital detox' 24 giờ mỗi tuần - nhiều bạn thấy mức lo âu giảm đáng kể chỉ sau vài tuần.",
        tips: "Ẩn hoặc bỏ theo dõi tài khoản khiến bạn cảm thấy tệ về bản thân mình",
    },
    SeedScenario {
        category: Category::Motivation,
        trigger: "mat dong luc chán hoc khong muon hoc nua",
        response: "Mất động lực học tập thường xảy ra khi bạn không thấy kết nối giữa việc đang học và điều bạn thực sự quan tâm. Hãy thử 'kỹ thuật tại sao': viết ra lý do học môn này có ích gì cho mục tiêu của bạn. Nếu không tìm ra lý do, đó là tín hiệu cần xem lại định hướng.",
        tips: "Tìm 1 ứng dụng thực tế của môn đang học trong cuộc sống - YouTube hay Google đều giúp được",
    },
    SeedScenario {
        category: Category::Motivation,
        trigger: "khong co muc tieu khong biet muon gi",
        response: "Không biết mình muốn gì là trạng thái rất nhiều học sinh gặp - và đó không phải vấn đề, đó là cơ hội khám phá. Hãy thử nhiều thứ mới trong 3 tháng: tham gia câu lạc bộ, học kỹ năng mới, đọc sách nhiều thể loại. Sở thích không tự nhiên xuất hiện - chúng phát triển qua trải nghiệm.",
        tips: "Thử 'thí nghiệm 30 ngày': mỗi tháng thử một điều mới hoàn toàn - nấu ăn, code, vẽ, nhạc cụ",
    },
    SeedScenario {
        category: Category::Motivation,
        trigger: "lười biếng cứ trì hoãn không làm việc",
        response: "Trì hoãn thường không phải lười biếng - đó thường là sợ hãi (thất bại, hoàn hảo, bị phán xét). Não bạn đang né tránh cảm giác khó chịu. Giải pháp: làm cho bắt đầu dễ đến mức không thể từ chối - mở sách ra, chưa cần đọc. Ngồi vào bàn học, chưa cần làm gì.",
        tips: "Quy tắc 2 phút: nếu việc gì làm được trong 2 phút, làm ngay. Hành động tạo ra động lực, không phải ngược lại.",
    },
    SeedScenario {
        category: Category::Motivation,
        trigger: "choi game nhieu qua bo hoc nghien game",
        response: "Nghiện game hoặc giải trí quá mức thường là cách não bộ tìm kiếm cảm giác thành tích và kiểm soát - những thứ mà học tập đôi khi không cho ngay lập tức. Thay vì cấm hoàn toàn (thường thất bại), hãy tạo quy tắc rõ ràng: game sau khi xong việc, có giới hạn thời gian.",
        tips: "Thử 'gamification' việc học: đặt điểm, level, reward cho bản thân giống như trong game",
    },
    SeedScenario {
        category: Category::Motivation,
        trigger: "cam thay vo nghia khong biet hoc de lam gi",
        response: "Cảm giác vô nghĩa trong học tập thường đến từ việc học theo yêu cầu người khác mà không kết nối với giá trị bản thân. Hỏi mình: điều gì khiến bạn tức giận với thế giới này? Điều gì bạn muốn thay đổi? Đó thường là manh mối cho nghề nghiệp và mục đích.",
        tips: "Đọc sách 'Ikigai' hoặc xem TED Talk của Simon Sinek 'Start With Why' - 18 phút thay đổi cách nhìn",
    },
    SeedScenario {
        category: Category::Motivation,
        trigger: "that bai qua nhieu nan long bo cuoc",
        response: "Thất bại nhiều lần dễ làm nản lòng. Nhưng mọi kỹ năng đều có đường cong học tập - ban đầu luôn khó. Thomas Edison thử 10.000 lần trước khi có bóng đèn. Hãy tách biệt 'thất bại trong việc này' khỏi 'tôi là kẻ thất bại' - đó là hai điều hoàn toàn khác nhau.",
        tips: "Viết ra 3 thất bại lớn nhất và điều bạn học được từ mỗi cái - đây là tài sản quý giá",
    },
    SeedScenario {
        category: Category::Motivation,
        trigger: "khong co nguoi ung ho cam giac mot minh",
        response: "Cảm giác thiếu sự ủng hộ và một mình trong hành trình học tập rất nặng nề. Hãy chủ động tìm cộng đồng: nhóm học tập, diễn đàn online, câu lạc bộ ở trường. Có những người đang đi cùng hướng với bạn - bạn chỉ cần tìm họ.",
        tips: "Tham gia 1 nhóm học tập online (Discord, Facebook group) về lĩnh vực bạn quan tâm",
    },
    SeedScenario {
        category: Category::Motivation,
        trigger: "ganh ty nguoi khac thanh cong hon cam giac kho chiu",
        response: "Ghen tị là cảm xúc rất con người - nó cho bạn biết điều bạn thực sự muốn. Thay vì xấu hổ về cảm xúc này, hãy khai thác nó: người bạn ghen tị có gì bạn muốn? Điều đó có thể thành hiện thực với bạn không? Nếu có, đó là hướng đi. Nếu không, hãy xem lại xem có phải đó thực sự là điều BẠN muốn.",
        tips: "Biến người bạn ngưỡng mộ thành hình mẫu (role model) thay vì đối thủ",
    },
    SeedScenario {
        category: Category::Focus,
        trigger: "khong tap trung duoc trong lop hoc o truong",
        response: "Khó tập trung trong lớp có thể do nhiều nguyên nhân: mệt, đói, điện thoại, hoặc nội dung quá khó/dễ. Thử 'active listening': thay vì ngồi thụ động, đặt câu hỏi trong đầu về nội dung thầy cô đang dạy. Ghi chép tay (không phải gõ) cũng tăng đáng kể khả năng ghi nhớ.",
        tips: "Ngồi bàn đầu hoặc gần thầy cô - không gian vật lý ảnh hưởng lớn đến sự tập trung",
    },
    SeedScenario {
        category: Category::Focus,
        trigger: "hay bi phan tam boi dien thoai mang xa hoi",
        response: "Điện thoại được thiết kế để gây nghiện - đây là cuộc chiến không cân sức. Đừng cố 'tự kiểm soát', hãy thay đổi môi trường: để điện thoại ở phòng khác khi học. Khoảng cách vật lý hiệu quả hơn ý chí nhiều lần.",
        tips: "App Forest hoặc Focus@Will: trồng cây ảo khi học, cây chết nếu mở điện thoại - gamification cho tập trung",
    },
    SeedScenario {
        category: Category::Focus,
        trigger: "dau oc nghi nhieu suy nghi nhieu khi co gang hoc",
        response: "Tâm trí lang thang (mind wandering) xảy ra tới 47% thời gian thức - hoàn toàn bình thường. Kỹ thuật: khi nhận ra mình đang mơ màng, đừng tự trách, chỉ nhẹ nhàng đưa sự chú ý trở lại. Luyện tập này chính là thiền định, và nó tăng dần theo thời gian.",
        tips: "Thực hành 'thở có ý thức' 3 phút trước khi học: đếm hơi thở từ 1 đến 10, lặp lại",
    },
    SeedScenario {
        category: Category::Focus,
        trigger: "hoc duoc mot luc la quen ngay mat tap trung",
        response: "Trí nhớ ngắn hạn có dung lượng hạn chế (7±2 đơn vị). Khi đầy, thông tin mới bị đẩy ra. Giải pháp: ôn lại sau 10 phút, 1 ngày, 3 ngày, 1 tuần (spaced repetition). App Anki làm điều này tự động. Ghi chú ngay sau học, không đợi sau.",
        tips: "Sau mỗi 25 phút học, dành 5 phút ghi lại điểm chính bằng lời của mình - không nhìn sách",
    },
    SeedScenario {
        category: Category::Focus,
        trigger: "khong gian hoc tap on ao nhieu nguoi khong yên tinh",
        response: "Môi trường học tập ảnh hưởng trực tiếp đến hiệu suất. Nếu không có không gian yên tĩnh ở nhà, hãy thử: thư viện trường, quán cà phê yên tĩnh, tai nghe chống ồn với nhạc không lời. Âm nhạc không có lời (lofi hip-hop, classical) giúp nhiều người tập trung hơn.",
        tips: "Tạo 'ritual' vào học: ngồi đúng chỗ, uống nước, đeo tai nghe - não sẽ học được: đây là lúc tập trung",
    },
    SeedScenario {
        category: Category::Focus,
        trigger: "hay ngu gat buon ngu khi hoc bai",
        response: "Buồn ngủ khi học thường do: thiếu ngủ đêm trước, ăn quá no, hoặc học thụ động quá lâu. Giải pháp tức thì: đứng dậy đi lại 5 phút, uống nước lạnh, hít thở sâu. Về lâu dài: ngủ đủ 7-8 tiếng là nền tảng, không có gì thay thế được.",
        tips: "Thử 'power nap' 20 phút sau bữa trưa - đặt báo thức 20 phút, không hơn (nếu hơn sẽ bị groggy)",
    },
    SeedScenario {
        category: Category::Focus,
        trigger: "hoc nhieu mon cung mot luc khong biet uu tien gi",
        response: "Học nhiều môn đồng thời mà không ưu tiên dẫn đến 'task-switching' liên tục - tiêu hao năng lượng não rất nhiều. Nguyên tắc: làm XONG một nhiệm vụ trước khi chuyển sang cái khác. Ưu tiên theo: deadline gần nhất + độ quan trọng.",
        tips: "Tạo lịch học theo khối: sáng môn khó, chiều môn dễ hơn, tối ôn lại - phù hợp với nhịp sinh học",
    },
    SeedScenario {
        category: Category::Focus,
        trigger: "adhd kho tap trung chuan doan roi loan tang dong",
        response: "ADHD không phải yếu kém - đó là não bộ hoạt động khác biệt. Nhiều người ADHD rất thành công khi tìm được môi trường và phương pháp phù hợp. Thử: học trong khoảng ngắn hơn (15-20 phút), vận động giữa các phiên, dùng body doubling (học cùng người khác), và ghi chép màu sắc.",
        tips: "Tham khảo bác sĩ hoặc chuyên gia tâm lý để được đánh giá và hỗ trợ chính thức nếu cần",
    },
    SeedScenario {
        category: Category::Sleep,
        trigger: "ngu khong duoc mat ngu kho ngu",
        response: "Mất ngủ ảnh hưởng trực tiếp đến học tập - chỉ cần thiếu 1-2 tiếng, khả năng ghi nhớ và tập trung giảm đáng kể. Vệ sinh giấc ngủ: ngủ và thức dậy cùng giờ mỗi ngày (kể cả cuối tuần), tắt màn hình 1 tiếng trước khi ngủ, giữ phòng mát và tối.",
        tips: "Nghe âm thanh sóng não Theta (trong mục Audio) - được thiết kế đặc biệt để hỗ trợ giấc ngủ",
    },
    SeedScenario {
        category: Category::Sleep,
        trigger: "nghi dem qua lo lang kho di vao giac ngu",
        response: "Suy nghĩ quá nhiều khi nằm xuống là vòng lặp rất phổ biến. Thử 'worry dump': trước khi ngủ 30 phút, viết ra TẤT CẢ lo lắng đang có, kèm hành động cụ thể sẽ làm ngày mai. Não sẽ không cần 'nhắc nhở' bạn nữa vì đã được ghi lại.",
        tips: "Kỹ thuật 4-7-8: hít 4 giây, giữ 7 giây, thở ra 8 giây - kích hoạt hệ thần kinh phó giao cảm",
    },
    SeedScenario {
        category: Category::Sleep,
        trigger: "ngu qua nhieu van met ngu ngon nhung khong cam thay nghỉ ngu",
        response: "Ngủ nhiều mà vẫn mệt có thể do: chất lượng giấc ngủ kém (ngủ nông, hay tỉnh), thiếu sắt/vitamin D, trầm cảm nhẹ, hoặc ngủ sai giờ. Nếu kéo dài hơn 2 tuần, nên gặp bác sĩ để kiểm tra.",
        tips: "Theo dõi giấc ngủ bằng app (Sleep Cycle, Google Fit) để xem thực sự ngủ bao nhiêu và chất lượng thế nào",
    },
    SeedScenario {
        category: Category::Sleep,
        trigger: "thuc khuya quen thuc khuya kho di ngu som",
        response: "Thức khuya là thói quen - và thói quen có thể thay đổi. Nhưng cần thời gian, không thể đột ngột. Chiến lược: lùi giờ ngủ 15 phút mỗi tuần (không phải đột ngột 2-3 tiếng). Ánh sáng xanh từ màn hình ức chế melatonin - bật chế độ night mode từ 8pm.",
        tips: "Tạo 'wind-down routine' 30 phút trước ngủ: đọc sách giấy, nghe nhạc nhẹ, tắm nước ấm",
    },
    SeedScenario {
        category: Category::Sleep,
        trigger: "ngu ngay khi ve nha xong toi lai thuc khong ngu duoc",
        response: "Ngủ ngày nhiều làm lệch đồng hồ sinh học. Nếu cần ngủ trưa, giới hạn 20-30 phút trước 3pm. Hãy cố ngủ và thức đúng giờ ít nhất 5 ngày liên tiếp - não cần thời gian thiết lập lại nhịp sinh học.",
        tips: "Tập thể dục buổi sáng 15-20 phút - ánh sáng mặt trời và vận động là 'đồng hồ sinh học' mạnh nhất",
    },
    SeedScenario {
        category: Category::Sleep,
        trigger: "ac mong thường xuyen giac ngu khong yen",
        response: "Ác mộng thường xuyên là dấu hiệu stress hoặc lo âu cao. Chúng là cách não xử lý cảm xúc chưa được giải quyết ban ngày. Thử 'Image Rehearsal Therapy': viết lại kết thúc của giấc mơ theo hướng tích cực khi tỉnh dậy và đọc lại trước khi ngủ.",
        tips: "Nếu ác mộng liên quan đến sự kiện traumatic cụ thể, nên tìm chuyên gia tâm lý hỗ trợ",
    },
    SeedScenario {
        category: Category::Loneliness,
        trigger: "co don khong co ban be cam giac bi loai tru",
        response: "Cô đơn không phải lỗi của bạn - nó thường là tín hiệu bạn cần kết nối sâu hơn, không chỉ nhiều hơn. Chất lượng quan trọng hơn số lượng. Thử tham gia hoạt động dựa trên sở thích chung - đây là nơi tốt nhất để tìm bạn thực sự.",
        tips: "Bắt đầu với 'proximity friendship': người ngồi cạnh trong lớp, bạn cùng câu lạc bộ - quen mặt là bước đầu",
    },
    SeedScenario {
        category: Category::Loneliness,
        trigger: "bi ban be xa la bo roi khong con thân",
        response: "Mất đi một tình bạn quan trọng đau không kém chia tay. Cho phép mình buồn - đây là mất mát thực sự. Nhưng nhớ rằng: mọi tình bạn đều có thời của nó. Bạn xứng đáng có những người bạn thực sự coi trọng bạn.",
        tips: "Đừng cố giành lại tình bạn đã mất - hãy đầu tư năng lượng vào những người đang hiện diện",
    },
    SeedScenario {
        category: Category::Loneliness,
        trigger: "cam thay khac biet khong ai hieu minh",
        response: "Cảm giác không ai hiểu mình thường đến từ việc chưa tìm được 'bộ lạc' của mình - những người chia sẻ giá trị và sở thích tương tự. Internet đã mở ra khả năng tìm kiếm rộng hơn nhiều. Có những cộng đồng cho hầu hết mọi sở thích và cách suy nghĩ.",
        tips: "Thử diễn đàn Reddit, Discord server về sở thích của bạn - nhiều người bắt đầu từ đây",
    },
    SeedScenario {
        category: Category::Loneliness,
        trigger: "yeu xa that bai tinh yeu dau khi chia tay",
        response: "Chia tay và mất đi người yêu là một trong những nỗi đau tâm lý mạnh nhất. Não trải qua phản ứng giống như cai nghiện về mặt sinh hóa. Cho phép mình đau trong một khoảng thời gian, nhưng đặt giới hạn: đừng xem lại ảnh, hạn chế theo dõi mạng xã hội của người cũ.",
        tips: "Vận động thể chất giải phóng endorphin - chạy bộ, bơi lội, gym đặc biệt hiệu quả sau chia tay",
    },
    SeedScenario {
        category: Category::Loneliness,
        trigger: "mau thuan voi thay co giao vien bat cong",
        response: "Xung đột với thầy cô có thể rất căng thẳng vì sự mất cân bằng quyền lực. Trước tiên, hãy thử hiểu góc nhìn của thầy cô. Nếu bạn tin mình bị đối xử không công bằng, hãy ghi chép sự kiện cụ thể và nói chuyện với phụ huynh hoặc cố vấn học đường.",
        tips: "Tránh đối đầu trực tiếp trước lớp - chọn nói chuyện riêng, lịch sự nhưng rõ ràng",
    },
    SeedScenario {
        category: Category::Loneliness,
        trigger: "mau thuan voi gia dinh bo me khong hieu",
        response: "Xung đột thế hệ với cha mẹ là phổ biến - họ lớn lên trong thế giới rất khác. Thay vì phán xét nhau, hãy tìm điểm chung: cả hai đều muốn bạn hạnh phúc và thành công, chỉ khác về phương pháp. Thử lắng nghe quan điểm của họ trước khi bảo vệ quan điểm của mình.",
        tips: "Chọn thời điểm tốt để nói chuyện (không phải lúc ai đó đang mệt hay bực bội)",
    },
    SeedScenario {
        category: Category::SelfEsteem,
        trigger: "tu ti kem cam thay ban than kem coi khong gioi gi",
        response: "Tự ti thường xuất phát từ so sánh không công bằng với người khác hoặc tiêu chuẩn không thực tế. Hãy nhớ: bạn đang so sánh highlight của người khác với behind-the-scenes của mình. Mỗi người có điểm mạnh khác nhau - nhiệm vụ là tìm ra của bạn.",
        tips: "Viết danh sách 10 điều bạn làm được tốt hơn 90% người xung quanh - ai cũng có",
    },
    SeedScenario {
        category: Category::SelfEsteem,
        trigger: "tu ti ngoai hinh body shame khong thich co the",
        response: "Không hài lòng với ngoại hình là một trong những nguồn tự ti phổ biến nhất, đặc biệt ở tuổi học sinh. Nhưng hãy nhớ: tiêu chuẩn 'đẹp' trên mạng là phi thực tế (filter, góc chụp, photoshop). Cơ thể bạn đang làm việc tuyệt vời để giữ bạn sống và hoạt động.",
        tips: "Thực hành 'body gratitude': mỗi ngày cảm ơn 1 phần cơ thể vì đã làm tốt việc của nó",
    },
    SeedScenario {
        category: Category::SelfEsteem,
        trigger: "tu ti vi hoc kem hon ban be diem thap",
        response: "Điểm số không đo lường giá trị bạn như một con người. Chúng đo lường khả năng tái hiện thông tin trong một bối cảnh cụ thể. Nhiều người điểm số không cao nhưng rất thành công vì họ có kỹ năng khác - sáng tạo, giao tiếp, kiên trì.",
        tips: "Tìm môn hoặc hoạt động bạn giỏi, đầu tư vào đó - thành công dù nhỏ xây dựng lại tự tin",
    },
    SeedScenario {
        category: Category::SelfEsteem,
        trigger: "cam thay minh khong xung dang voi tinh cam gia dinh",
        response: "Cảm giác không xứng đáng được yêu thương là dấu hiệu của tổn thương cảm xúc sâu. Đây không phải sự thật - đây là câu chuyện mà não bạn đã học từ những trải nghiệm đau trong quá khứ. Bạn xứng đáng được yêu thương chỉ vì bạn là con người.",
        tips: "Liệu pháp nhận thức (CBT) rất hiệu quả cho vấn đề này - tìm chuyên gia tâm lý để được hỗ trợ",
    },
    SeedScenario {
        category: Category::SelfEsteem,
        trigger: "tu phe binh ban than qua khac nghiet hay tu tranh phac minh",
        response: "Tự phê bình quá mức là dấu hiệu của inner critic mạnh. Thử bài tập: khi bạn nói với bản thân điều gì đó khắc nghiệt, hỏi 'Tôi có nói điều này với người bạn thân không?' Nếu không, đừng nói với bản thân mình.",
        tips: "Thực hành 'self-compassion': đối xử với mình như với người bạn thân nhất đang gặp khó khăn",
    },
    SeedScenario {
        category: Category::SelfEsteem,
        trigger: "cam thay vo dung khong co gi dat duoc",
        response: "Cảm giác vô dụng thường che giấu những kỳ vọng quá cao hoặc tiêu chuẩn không thực tế. Hãy nhìn lại: bạn đã đi được bao xa từ điểm xuất phát? So sánh với chính mình 1 năm trước, không phải với người khác.",
        tips: "Tạo 'bảng thành tựu': ghi lại MỌI điều nhỏ bạn hoàn thành - từ hoàn thành bài tập đến giúp bạn bè",
    },
    SeedScenario {
        category: Category::Depression,
        trigger: "buon khong ly do cam giac trong rong trong long",
        response: "Cảm giác buồn không lý do và trống rỗng kéo dài có thể là dấu hiệu trầm cảm nhẹ. Điều quan trọng: đừng chiến đấu một mình. Chia sẻ với một người bạn tin tưởng hoặc chuyên gia tâm lý. Cảm giác này có thể điều trị được.",
        tips: "Vận động nhẹ 15 phút mỗi ngày - hiệu quả như thuốc chống trầm cảm nhẹ theo một số nghiên cứu",
    },
    SeedScenario {
        category: Category::Depression,
        trigger: "khoc khong ro nguyen nhan hay khoc cam thay te",
        response: "Khóc không vì lý do rõ ràng là cách cơ thể giải phóng cảm xúc tích tụ. Đừng ngăn nước mắt - hãy để chúng chảy. Sau khi khóc xong, thử viết ra bất kỳ cảm xúc hoặc suy nghĩ nào xuất hiện - thường sẽ tìm ra nguyên nhân sâu xa.",
        tips: "Nếu khóc không kiểm soát được và kéo dài nhiều tuần, hãy tìm chuyên gia tâm lý",
    },
    SeedScenario {
        category: Category::Depression,
        trigger: "mat hang moi thu khong cam thay gi nua te liet",
        response: "Mất hứng thú với mọi thứ từng thích (anhedonia) là triệu chứng quan trọng của trầm cảm. Đây là tín hiệu cần được chú ý và hỗ trợ chuyên nghiệp. Bạn không yếu đuối - đây là vấn đề y tế có thể điều trị được.",
        tips: "Hãy nói chuyện với người lớn đáng tin cậy ngay hôm nay - không cần phải đợi đến khi 'đủ tệ'",
    },
    SeedScenario {
        category: Category::Depression,
        trigger: "suy nghi tieu cuc khong kiem soat duoc",
        response: "Suy nghĩ tiêu cực lặp đi lặp lại (rumination) có thể trở thành vòng lặp khó thoát. Kỹ thuật nhận thức: đặt câu hỏi với suy nghĩ tiêu cực: 'Bằng chứng nào ủng hộ suy nghĩ này? Bằng chứng nào chống lại?'. Suy nghĩ không phải sự thật - chỉ là suy nghĩ.",
        tips: "Thiền mindfulness 10 phút/ngày (app Headspace hoặc Insight Timer) - giúp quan sát suy nghĩ mà không bị kéo đi",
    },
    SeedScenario {
        category: Category::Depression,
        trigger: "nghi den tu tu tu thuong suy nghi ve cai chet",
        response: "Nếu bạn đang có suy nghĩ về tự làm hại bản thân hoặc tự tử, đây là tình huống khẩn cấp cần được hỗ trợ ngay. Bạn không phải đối mặt một mình. Hãy gọi ngay đường dây hỗ trợ sức khỏe tâm thần, hoặc nói với người lớn đáng tin cậy ngay bây giờ.",
        tips: "Đường dây hỗ trợ khủng hoảng tâm thần Việt Nam: 1800 599 920 (miễn phí, 24/7)",
    },
    SeedScenario {
        category: Category::Depression,
        trigger: "cam thay tuyet vong khong con hy vong gi nua",
        response: "Cảm giác tuyệt vọng và không thấy tương lai là triệu chứng nghiêm trọng cần được hỗ trợ chuyên nghiệp. Nhưng hãy nhớ: cảm giác tuyệt vọng là triệu chứng của trầm cảm, không phải phản ánh thực tế. Khi được điều trị, tương lai sẽ khác.",
        tips: "Nói chuyện với chuyên gia tâm lý học đường hoặc gọi đường dây hỗ trợ ngay hôm nay",
    },
];
